//! Template-macro artifact rendering (Nunjucks)

use crate::category::Category;
use crate::naming::ComponentName;

/// Utility classes applied when the style lookup has no entry for the slug
const FALLBACK_CLASSES: &str = "inline-block rounded px-4 py-2 bg-gray-100 text-gray-900";

/// Render the Nunjucks macro for a component.
///
/// The macro resolves its utility classes from the shared style data keyed
/// `styles.<category>.<slug>[<style>]`, defaulting the style argument to
/// "default" and falling back to a hard-coded class string when the lookup
/// is absent. The container's CSS class always includes the slug.
pub fn render(name: &ComponentName, category: Category) -> String {
    let slug = name.slug();
    let macro_name = name.macro_name();
    format!(
        r#"{{% macro {macro_name}(content, style="default") %}}
{{% set variants = styles.{category}.{slug} %}}
{{% set classes = variants[style] if variants and variants[style] else "{FALLBACK_CLASSES}" %}}
<span class="{slug} {{{{ classes }}}}">{{{{ content.label }}}}</span>
{{% endmacro %}}
"#,
        macro_name = macro_name,
        category = category.key(),
        slug = slug,
    )
}

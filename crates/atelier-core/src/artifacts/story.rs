//! Story artifact rendering (Storybook CSF)

use crate::artifacts::VARIANTS;
use crate::category::Category;
use crate::manifest::ProjectManifest;
use crate::naming::ComponentName;

/// Render the stories file for a component.
///
/// The file imports the content and style data files generated alongside it
/// (stories live two directories below the source root, hence the `../../`
/// relative imports), wires one story per seeded example record, and carries
/// a usage snippet showing how to import the macro from a page template.
pub fn render(name: &ComponentName, category: Category, manifest: &ProjectManifest) -> String {
    let slug = name.slug();
    let macro_name = name.macro_name();
    let mut js = String::new();

    js.push_str(&format!(
        "import contents from '../../_data/contents/{}/{}.json';\n",
        category.key(),
        name.plural_slug()
    ));
    js.push_str(&format!(
        "import styles from '../../_data/styles/{}.json';\n\n",
        category.key()
    ));

    js.push_str("const usage = [\n");
    js.push_str(&format!(
        "  '{{% from \"{}/{}.{}\" import {} %}}',\n",
        category.dir_prefix(),
        slug,
        manifest.template_ext,
        macro_name
    ));
    js.push_str(&format!("  '{{{{ {}(content, \"primary\") }}}}',\n", macro_name));
    js.push_str("].join('\\n');\n\n");

    js.push_str("const render = ({ label, style }) => {\n");
    js.push_str(&format!(
        "  const classes = (styles{access} && styles{access}[style]) || '';\n",
        access = js_lookup(&slug)
    ));
    js.push_str(&format!(
        "  return `<span class=\"{} ${{classes}}\">${{label}}</span>`;\n",
        slug
    ));
    js.push_str("};\n\n");

    js.push_str("export default {\n");
    js.push_str(&format!(
        "  title: '{}/{}',\n",
        category.display_name(),
        name.pascal()
    ));
    js.push_str("  parameters: {\n");
    js.push_str("    docs: { description: { component: usage } },\n");
    js.push_str("  },\n");
    js.push_str("  argTypes: {\n");
    js.push_str("    style: {\n");
    js.push_str("      control: 'select',\n");
    js.push_str(&format!(
        "      options: [{}],\n",
        VARIANTS
            .iter()
            .map(|v| format!("'{}'", v))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    js.push_str("    },\n");
    js.push_str("  },\n");
    js.push_str("};\n\n");

    for (index, variant) in VARIANTS.iter().enumerate() {
        js.push_str(&format!(
            "export const {} = {{ render, args: contents[{}] }};\n",
            pascal_variant(variant),
            index
        ));
    }

    js
}

/// Property access for the slug: dotted for plain identifiers, bracketed
/// when the slug contains hyphens
fn js_lookup(slug: &str) -> String {
    if slug.contains('-') {
        format!("['{}']", slug)
    } else {
        format!(".{}", slug)
    }
}

fn pascal_variant(variant: &str) -> String {
    let mut chars = variant.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

use modkit::error::Error;
use modkit::renderer::{MiniJinjaRenderer, TemplateRenderer, TemplateVariables};

fn variables(pairs: &[(&str, &str)]) -> TemplateVariables {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_renders_variables() {
    let renderer = MiniJinjaRenderer::new();
    let vars = variables(&[("module_name", "python-basics"), ("category", "programming")]);

    let result = renderer
        .render("Module {{ module_name }} ({{ category }})", &vars)
        .unwrap();
    assert_eq!(result, "Module python-basics (programming)");
}

#[test]
fn test_missing_variable_is_named() {
    let renderer = MiniJinjaRenderer::new();
    let vars = variables(&[("module_name", "python-basics")]);

    let err = renderer.render("{{ module_name }} by {{ author }}", &vars).unwrap_err();
    match err {
        Error::UndefinedVariable { variable } => assert_eq!(variable, "author"),
        other => panic!("Expected UndefinedVariable, got {:?}", other),
    }
}

#[test]
fn test_rendered_content_is_a_fixed_point() {
    let renderer = MiniJinjaRenderer::new();
    let vars = variables(&[("module_title", "Python Basics")]);

    let input = "---\ntitle: \"{{ module_title }}\"\n---\n\n# {{ module_title }}\n";
    let once = renderer.render(input, &vars).unwrap();
    let twice = renderer.render(&once, &vars).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_plain_text_passes_through_unchanged() {
    let renderer = MiniJinjaRenderer::new();
    let vars = TemplateVariables::new();

    let input = "# Heading\n\nNo references here, just markdown.\n";
    assert_eq!(renderer.render(input, &vars).unwrap(), input);
}

#[test]
fn test_deterministic_for_identical_inputs() {
    let renderer = MiniJinjaRenderer::new();
    let vars = variables(&[("language", "en")]);

    let a = renderer.render("lang: {{ language }}", &vars).unwrap();
    let b = renderer.render("lang: {{ language }}", &vars).unwrap();
    assert_eq!(a, b);
}

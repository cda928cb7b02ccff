//! modkit's main application entry point and orchestration logic.
//! Parses arguments, wires up configuration, and dispatches to the
//! scaffolding and validation engines.

use std::path::PathBuf;

use modkit::{
    cli::{get_args, Args, Command},
    config::{Config, Defaults},
    descriptor::Difficulty,
    error::{default_error_handler, Error, Result},
    prompt,
    renderer::{MiniJinjaRenderer, TemplateVariables},
    resolver::{search_roots, TemplateResolver},
    scaffold::Scaffolder,
    tree::ModuleTree,
    validator::validate,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Templates shipped alongside the installed binary, falling back to the
/// source checkout for development builds.
fn bundled_templates_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// The user's personal template override directory, if a home is known.
fn user_templates_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".modkit").join("templates"))
}

fn system_templates_dir() -> PathBuf {
    PathBuf::from("/usr/share/modkit/templates")
}

fn build_resolver(config: &Config) -> TemplateResolver {
    TemplateResolver::new(search_roots(
        user_templates_dir(),
        bundled_templates_dir(),
        system_templates_dir(),
        &config.template_roots,
    ))
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load_file(path),
        None => Config::load_dir("."),
    }
}

/// "python-basics" becomes "Python Basics".
fn title_from_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses repeated `--var KEY=VALUE` arguments.
fn parse_var_overrides(vars: &[String]) -> Result<Vec<(String, String)>> {
    vars.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .ok_or_else(|| {
                    Error::ConfigError(format!("Invalid --var '{}': expected KEY=VALUE", pair))
                })
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn run_create(
    config: &Config,
    module_name: String,
    template: String,
    category: Option<String>,
    difficulty: Option<Difficulty>,
    language: Option<String>,
    author: Option<String>,
    output_dir: PathBuf,
    vars: Vec<String>,
    interactive: bool,
) -> Result<()> {
    let defaults = if interactive {
        prompt::prompt_defaults(&config.defaults)?
    } else {
        config.defaults.clone()
    };
    // Explicit flags win over prompts and config alike.
    let Defaults {
        author: d_author,
        category: d_category,
        difficulty: d_difficulty,
        language: d_language,
    } = defaults;

    let mut variables = TemplateVariables::new();
    variables.insert("module_name".to_string(), module_name.clone());
    variables.insert("module_title".to_string(), title_from_name(&module_name));
    variables.insert("category".to_string(), category.unwrap_or(d_category));
    variables.insert(
        "difficulty".to_string(),
        difficulty.unwrap_or(d_difficulty).to_string(),
    );
    variables.insert("language".to_string(), language.unwrap_or(d_language));
    variables.insert("author".to_string(), author.unwrap_or(d_author));
    for (key, value) in parse_var_overrides(&vars)? {
        variables.insert(key, value);
    }

    let resolver = build_resolver(config);
    let renderer = MiniJinjaRenderer::new();
    let scaffolder = Scaffolder::new(&resolver, &renderer);

    let outcome = scaffolder.scaffold(&template, &module_name, &variables, &output_dir)?;
    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }

    match outcome.tree.descriptor() {
        Ok(descriptor) => println!(
            "Created module '{}' ({}, {}) in {}.",
            descriptor.name,
            descriptor.category,
            descriptor.difficulty,
            outcome.tree.root().display()
        ),
        Err(_) => println!("Created module in {}.", outcome.tree.root().display()),
    }
    Ok(())
}

fn run_validate(path: PathBuf) -> Result<()> {
    let tree = ModuleTree::new(path);
    let report = validate(&tree);

    for error in report.errors() {
        println!("error: {}", error);
    }
    for warning in report.warnings() {
        println!("warning: {}", warning);
    }

    if report.is_valid() {
        println!(
            "Module '{}' is valid ({} warning(s)).",
            tree.root().display(),
            report.warnings().len()
        );
        Ok(())
    } else {
        println!(
            "Module '{}' is invalid: {} error(s), {} warning(s).",
            tree.root().display(),
            report.errors().len(),
            report.warnings().len()
        );
        std::process::exit(1);
    }
}

fn run_delete(path: PathBuf, force: bool) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::ConfigError(format!(
            "'{}' is not a directory",
            path.display()
        )));
    }
    if !force && !ModuleTree::new(&path).descriptor_path().is_file() {
        return Err(Error::ConfigError(format!(
            "'{}' does not look like a module (no module.json); use --force to delete anyway",
            path.display()
        )));
    }

    let confirmed =
        prompt::confirm(force, format!("Delete module '{}'?", path.display()))?;
    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    std::fs::remove_dir_all(&path).map_err(Error::IoError)?;
    println!("Deleted '{}'.", path.display());
    Ok(())
}

fn run_templates(config: &Config) -> Result<()> {
    let resolver = build_resolver(config);
    let templates = resolver.list();
    if templates.is_empty() {
        println!("No templates found. Searched roots:");
    } else {
        for template in &templates {
            println!("{}", template);
        }
        println!("Searched roots:");
    }
    for root in resolver.roots() {
        println!("  {}", root.display());
    }
    Ok(())
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    match args.command {
        Command::Create {
            module_name,
            template,
            category,
            difficulty,
            language,
            author,
            output_dir,
            vars,
            interactive,
        } => run_create(
            &config,
            module_name,
            template,
            category,
            difficulty,
            language,
            author,
            output_dir,
            vars,
            interactive,
        ),
        Command::Validate { path } => run_validate(path),
        Command::Delete { path, force } => run_delete(path, force),
        Command::Templates => run_templates(&config),
    }
}

//! Registration form demo.
//!
//! Builds the registration form (or a form from a JSON seed file), renders it
//! into a `VirtualDocument`, applies any `--set`/`--check` interactions,
//! optionally submits, and prints the resulting HTML and extracted values.
//!
//! ```text
//! register --set name="Jane Doe" --set email=jane@example.com --check terms_0 --submit
//! ```

use std::process::ExitCode;

use dynaform_core::logging::setup_logging;
use dynaform_core::{FormError, FormResult};
use dynaform_forms::config::FormConfig;
use dynaform_forms::dom::Document;
use dynaform_forms::form::{FormEngine, Submission};
use dynaform_forms::seed::{load_seeds_file, registration_seed};
use dynaform_forms::virtual_dom::VirtualDocument;

fn build_cli() -> clap::Command {
    clap::Command::new("register")
        .about("Render, fill, and submit a dynaform form in memory")
        .arg(
            clap::Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML form configuration"),
        )
        .arg(
            clap::Arg::new("seeds")
                .long("seeds")
                .value_name("FILE")
                .help("JSON array of field seeds (defaults to the registration form)"),
        )
        .arg(
            clap::Arg::new("set")
                .long("set")
                .value_name("ID=VALUE")
                .action(clap::ArgAction::Append)
                .help("Type a value into the control with the given id"),
        )
        .arg(
            clap::Arg::new("check")
                .long("check")
                .value_name("ID")
                .action(clap::ArgAction::Append)
                .help("Check the checkbox or radio input with the given id"),
        )
        .arg(
            clap::Arg::new("submit")
                .long("submit")
                .action(clap::ArgAction::SetTrue)
                .help("Submit the form after filling it"),
        )
        .arg(
            clap::Arg::new("log-level")
                .long("log-level")
                .default_value("info")
                .help("Log filter directive"),
        )
        .arg(
            clap::Arg::new("pretty")
                .long("pretty")
                .action(clap::ArgAction::SetTrue)
                .help("Use the multi-line log format instead of JSON lines"),
        )
}

fn default_config() -> FormConfig {
    FormConfig::builder()
        .mount_target("form_container")
        .form_name("register_form")
        .title("Form without HTML")
        .title_style_hook("register_form_title")
        .legend("This form is built entirely from field descriptors.")
        .legend_style_hook("register_form_legend")
        .diagnostics(true)
        .build()
}

fn load_engine(matches: &clap::ArgMatches) -> FormResult<FormEngine> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => FormConfig::from_toml_file(path)?,
        None => default_config(),
    };
    let config = config.with_submit_action(|| tracing::info!("Success!"));

    let mut engine = FormEngine::new(config);
    match matches.get_one::<String>("seeds") {
        Some(path) => {
            for seed in load_seeds_file(path)? {
                engine.add_seed(seed);
            }
        }
        None => {
            for field in registration_seed() {
                engine.add_field(field);
            }
        }
    }
    Ok(engine)
}

fn apply_interactions(doc: &mut VirtualDocument, matches: &clap::ArgMatches) -> FormResult<()> {
    let lookup = |doc: &VirtualDocument, id: &str| {
        doc.element_by_id(id)
            .ok_or_else(|| FormError::Configuration(format!("no control with id \"{id}\"")))
    };

    for pair in matches.get_many::<String>("set").into_iter().flatten() {
        let (id, value) = pair.split_once('=').ok_or_else(|| {
            FormError::Configuration(format!("expected ID=VALUE, got \"{pair}\""))
        })?;
        let node = lookup(doc, id)?;
        if doc.tag_name(node) == Some("select") {
            doc.select_option(node, value);
        } else {
            doc.set_value(node, value);
        }
    }
    for id in matches.get_many::<String>("check").into_iter().flatten() {
        let node = lookup(doc, id)?;
        doc.set_checked(node, true);
    }
    Ok(())
}

fn run(matches: &clap::ArgMatches) -> FormResult<()> {
    let mut engine = load_engine(matches)?;
    let mut doc = VirtualDocument::new();
    let mount = doc.mount_point(engine.config().mount_target_id());

    engine
        .render(&mut doc)
        .ok_or_else(|| FormError::MissingMountTarget(engine.config().mount_target_id().into()))?;
    apply_interactions(&mut doc, matches)?;

    if matches.get_flag("submit") {
        match engine.submit(&mut doc) {
            Submission::Accepted => tracing::info!("submission accepted"),
            Submission::Rejected(failure) => {
                tracing::warn!(field = %failure.identifier, "{}", failure.error);
            }
            Submission::Ignored => tracing::warn!("nothing to submit"),
        }
    }

    println!("{}", doc.to_html(mount));
    for popup in doc.elements_by_class(engine.config().popup_style_hook()) {
        println!("{}", doc.to_html(popup));
    }
    if let Some(values) = engine.values(&doc) {
        println!("{}", values.to_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let level = matches
        .get_one::<String>("log-level")
        .map_or("info", String::as_str);
    setup_logging(level, matches.get_flag("pretty"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> clap::ArgMatches {
        build_cli().get_matches_from(std::iter::once("register").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_parses_interactions() {
        let m = matches(&[
            "--set",
            "name=Jane Doe",
            "--set",
            "age=30",
            "--check",
            "terms_0",
            "--submit",
        ]);
        let sets: Vec<&String> = m.get_many::<String>("set").unwrap().collect();
        assert_eq!(sets, ["name=Jane Doe", "age=30"]);
        assert!(m.get_flag("submit"));
        assert_eq!(m.get_one::<String>("log-level").unwrap(), "info");
    }

    #[test]
    fn test_fill_and_submit_registration() {
        let m = matches(&[
            "--set",
            "name=Jane Doe",
            "--set",
            "email=jane@example.com",
            "--set",
            "password=Str0ng!Pass",
            "--set",
            "age=30",
            "--set",
            "gender=other",
            "--check",
            "terms_0",
        ]);
        let mut engine = load_engine(&m).unwrap();
        let mut doc = VirtualDocument::new();
        doc.mount_point("form_container");
        engine.render(&mut doc).unwrap();
        apply_interactions(&mut doc, &m).unwrap();
        assert_eq!(engine.submit(&mut doc), Submission::Accepted);
    }

    #[test]
    fn test_unknown_control_is_an_error() {
        let m = matches(&["--set", "nope=1"]);
        let mut engine = load_engine(&m).unwrap();
        let mut doc = VirtualDocument::new();
        doc.mount_point("form_container");
        engine.render(&mut doc).unwrap();
        assert!(apply_interactions(&mut doc, &m).is_err());
    }
}

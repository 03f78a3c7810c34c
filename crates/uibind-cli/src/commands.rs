use anyhow::{Context, Result, anyhow};
use tracing::info_span;

use uibind_cli::summary::{entries_table, prefix_table, print_notes, vocabulary_table};
use uibind_core::{BindingOptions, Session};
use uibind_report::Banner;

use crate::cli::{EditArgs, GenerateArgs, ListArgs, ListFormatArg, ProjectArgs};

pub fn binding_options(args: &ProjectArgs) -> BindingOptions {
    BindingOptions {
        working_dir: args.working_dir.clone(),
        include_file: args.include_file.clone(),
        binding_name: args.binding_name.clone(),
        constant_prefix: args.constant_prefix.clone(),
        accept_all: args.accept_all,
        object_type: args.object_type.clone(),
    }
}

fn open_session(project: &ProjectArgs) -> Result<Session> {
    let options = binding_options(project);
    let header = options.header_path();
    Session::open(options).with_context(|| format!("open binding project at {}", header.display()))
}

pub fn run_list(project: &ProjectArgs, args: &ListArgs) -> Result<()> {
    let session = open_session(project)?;
    match args.format {
        ListFormatArg::Table => {
            println!("{}", entries_table(session.store()));
            let scan = session.last_scan();
            println!(
                "{} declarations: {} mapped, {} fallback, {} unsupported, {} duplicate",
                scan.declarations, scan.mapped, scan.fallback, scan.rejected, scan.duplicates
            );
            if !session.notes().is_empty() {
                print_notes(session.notes());
            }
        }
        ListFormatArg::Json => {
            let entries: Vec<_> = session.entries().collect();
            let json = serde_json::to_string_pretty(&entries).context("serialize entries")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_edit(project: &ProjectArgs, args: &EditArgs) -> Result<()> {
    let mut session = open_session(project)?;
    let _span = info_span!("edit", identifier = %args.identifier).entered();
    for assignment in &args.assignments {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected FIELD=VALUE, got {assignment:?}"))?;
        session
            .edit(&args.identifier, field.trim(), value)
            .with_context(|| format!("edit {} {}", args.identifier, field.trim()))?;
    }
    save(&session, args.output)
}

pub fn run_generate(project: &ProjectArgs, args: GenerateArgs) -> Result<()> {
    let session = open_session(project)?;
    save(&session, args)
}

fn save(session: &Session, args: GenerateArgs) -> Result<()> {
    let banner = (!args.no_banner).then(|| Banner {
        tool: "uibind".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        date: chrono::Local::now().date_naive(),
    });
    let emit = session.emit_options(args.diagnostic, banner);
    let report = session.save(&emit).context("save bindings")?;
    println!("Settings: {}", report.document_path.display());
    println!("Bindings: {}", report.source_path.display());
    if !session.notes().is_empty() {
        print_notes(session.notes());
    }
    Ok(())
}

pub fn run_notes(project: &ProjectArgs) -> Result<()> {
    let session = open_session(project)?;
    print_notes(session.notes());
    Ok(())
}

pub fn run_types() {
    println!("{}", prefix_table(&uibind_model::PrefixTypeTable::standard()));
    println!("{}", vocabulary_table());
}

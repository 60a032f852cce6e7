use super::Context;
use crate::error::Result;
use crate::project_identity;
use crate::state::FilesystemStateStore;
use crate::tools::{AuthSelect, ToolKind};
use crate::ui as output;
use crate::utils::paths;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Authentication configuration");

    let binary = ctx.tool.binary();
    output::keyval("Tool", ctx.kind.as_str());
    output::keyval("Binary", &binary.display().to_string());
    output::keyval(
        "Settings",
        &ctx.settings
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string()),
    );

    if ctx.kind == ToolKind::AuthSelect {
        let selector = AuthSelect::new(binary.to_path_buf(), ctx.runner.clone(), ctx.logger.clone());
        match selector.current()? {
            Some(snapshot) => {
                output::keyval("Profile", &snapshot.profile);
                if snapshot.features.is_empty() {
                    output::keyval("Features", "(none)");
                } else {
                    output::keyval("Features", &snapshot.features_list());
                }
            }
            None => output::keyval("Profile", "(none selected)"),
        }
    }

    show_recorded_state(ctx)
}

fn show_recorded_state(ctx: &Context) -> Result<()> {
    output::header("Recorded state");

    // Opening the store would create the state directory
    if !paths::state_file(&ctx.settings.state_dir).exists() {
        nothing_recorded();
        return Ok(());
    }

    let store = FilesystemStateStore::open(&ctx.settings.state_dir)?;
    let namespaces = store.namespaces();
    if namespaces.is_empty() {
        nothing_recorded();
        return Ok(());
    }

    output::keyval("State file", &store.path().display().to_string());
    output::keyval("Host", store.hostname());
    for namespace in namespaces {
        output::indent(namespace, 1);
    }
    Ok(())
}

fn nothing_recorded() {
    output::info(&format!(
        "Nothing recorded (state is written by '{}')",
        project_identity::cli_with("configure")
    ));
}

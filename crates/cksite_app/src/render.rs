use cksite_core::{AppViewModel, StatusTone as CoreStatusTone};

use crate::commands::{ShellCommand, StatusTone};

/// Project the whole view model into host commands. The shell calls this
/// only when the core marked itself dirty.
pub fn render(view: &AppViewModel) -> Vec<ShellCommand> {
    let mut cmds = Vec::new();

    cmds.push(ShellCommand::SetMessageDraft {
        text: view.message_draft.clone(),
    });
    cmds.push(ShellCommand::SetSubmitControl {
        enabled: view.submit_enabled,
        label: view.submit_label.to_owned(),
    });
    match &view.status_line {
        Some(line) => cmds.push(ShellCommand::SetStatusLine {
            tone: map_tone(line.tone),
            text: line.text.clone(),
        }),
        None => cmds.push(ShellCommand::ClearStatusLine),
    }
    cmds.push(ShellCommand::SetBackControl {
        mounted: view.back_control.mounted,
        visible: view.back_control.visible,
    });
    cmds.push(ShellCommand::SetTopControl {
        visible: view.top_visible,
    });

    cmds
}

fn map_tone(tone: CoreStatusTone) -> StatusTone {
    match tone {
        CoreStatusTone::Positive => StatusTone::Positive,
        CoreStatusTone::Negative => StatusTone::Negative,
    }
}

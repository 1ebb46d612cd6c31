pub mod filters;
pub mod format;
pub mod list;
pub mod search;

use promptdeck_browser::BrowserSession;

/// Apply "Group=Label" selections from the command line to the loaded
/// catalog. Matching is case-insensitive; selections that match nothing
/// are warned about and skipped.
pub(crate) fn apply_filter_args(session: &mut BrowserSession, args: &[String]) {
    for arg in args {
        let Some((group_arg, label_arg)) = arg.split_once('=') else {
            eprintln!("warning: ignoring filter {arg:?} (expected Group=Label)");
            continue;
        };
        let (group_arg, label_arg) = (group_arg.trim(), label_arg.trim());

        let selection = session
            .filter_groups()
            .iter()
            .find(|g| g.title.eq_ignore_ascii_case(group_arg))
            .and_then(|group| {
                group
                    .options
                    .iter()
                    .find(|o| o.label.eq_ignore_ascii_case(label_arg))
                    .map(|option| (group.title.clone(), option.id.clone()))
            });

        match selection {
            Some((group_title, option_id)) => {
                session.set_filter_option(&group_title, &option_id, true);
            }
            None => eprintln!("warning: no filter option matching {arg:?}"),
        }
    }
}

/// Print accumulated diagnostics to stderr.
pub(crate) fn drain_feedback(session: &mut BrowserSession) {
    for feedback in session.take_feedback() {
        eprintln!("{feedback}");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the course page.
//!
//! Row actions go through the awaitable confirmation dialog and report the
//! outcome with a toast, the way every CRUD page of the dashboard does.

use super::courses::{Catalog, CourseId};
use super::Message;
use crate::ui::confirm::{ConfirmOptions, Confirmer};
use crate::ui::notifications::{self, Lifetime, Notification, Notifier};
use iced::Task;

/// Asks for confirmation before deleting a course.
pub fn handle_delete_course(
    catalog: &Catalog,
    confirmer: &Confirmer,
    id: CourseId,
) -> Task<Message> {
    let Some(course) = catalog.get(id) else {
        return Task::none();
    };
    Task::perform(
        confirmer.confirm_delete(course.name.clone(), Some("course")),
        move |confirmed| Message::DeleteConfirmed(id, confirmed),
    )
}

pub fn handle_delete_confirmed(
    catalog: &mut Catalog,
    notifier: &Notifier,
    id: CourseId,
    confirmed: bool,
) {
    if !confirmed {
        log::debug!("deletion of {id:?} cancelled");
        return;
    }
    match catalog.remove(id) {
        Some(course) => {
            notifier.success(format!("\"{}\" was deleted.", course.name));
        }
        None => {
            notifier.error("This course no longer exists.");
        }
    }
}

/// Asks for confirmation before publishing or unpublishing a course.
pub fn handle_update_course(
    catalog: &Catalog,
    confirmer: &Confirmer,
    id: CourseId,
) -> Task<Message> {
    let Some(course) = catalog.get(id) else {
        return Task::none();
    };
    let status = if course.published {
        "Published"
    } else {
        "Draft"
    };
    let options = ConfirmOptions::update(course.name.clone(), Some("course"))
        .detail("Instructor", course.instructor.clone())
        .detail("Sessions", course.sessions.to_string())
        .detail("Status", status);
    Task::perform(confirmer.confirm(options), move |confirmed| {
        Message::UpdateConfirmed(id, confirmed)
    })
}

pub fn handle_update_confirmed(
    catalog: &mut Catalog,
    notifier: &Notifier,
    id: CourseId,
    confirmed: bool,
) {
    if !confirmed {
        notifier.info("No changes were made.");
        return;
    }
    match catalog.toggle_published(id) {
        Some(true) => {
            notifier.success("Course published.");
        }
        Some(false) => {
            notifier.success("Course moved back to draft.");
        }
        None => {
            notifier.error("This course no longer exists.");
        }
    }
}

/// Raises an error toast with a custom title, as an API wrapper would.
pub fn handle_simulated_failure(notifier: &Notifier) {
    notifier.show(
        Notification::error("The server did not answer within 10 seconds.")
            .with_title("Network error"),
    );
}

/// Raises a warning that stays until the user closes it.
pub fn handle_raise_warning(notifier: &Notifier) {
    notifier.show(
        Notification::warning("Enrollment closes tonight at 23:00 for maintenance.")
            .with_lifetime(Lifetime::Persistent),
    );
}

/// Notifies from a worker thread through the process-wide functions.
pub fn handle_sync_catalog(catalog: &Catalog) {
    let count = catalog.len();
    std::thread::spawn(move || {
        log::info!("synchronizing {count} courses");
        notifications::notify_info(format!("{count} courses synchronized with the registry."));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Command, Kind};

    #[test]
    fn confirmed_delete_removes_course_and_notifies_success() {
        let mut catalog = Catalog::sample();
        let (notifier, mut inbox) = Notifier::channel();

        handle_delete_confirmed(&mut catalog, &notifier, CourseId(1), true);

        assert!(catalog.get(CourseId(1)).is_none());
        match inbox.try_recv() {
            Ok(Command::Show(notification)) => {
                assert_eq!(notification.kind(), Kind::Success);
                assert!(notification.message().contains("Welding Fundamentals"));
            }
            other => panic!("expected a success toast, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_delete_keeps_course_silently() {
        let mut catalog = Catalog::sample();
        let (notifier, mut inbox) = Notifier::channel();

        handle_delete_confirmed(&mut catalog, &notifier, CourseId(1), false);

        assert!(catalog.get(CourseId(1)).is_some());
        assert!(inbox.try_recv().is_err());
    }

    #[test]
    fn cancelled_update_reports_info() {
        let mut catalog = Catalog::sample();
        let (notifier, mut inbox) = Notifier::channel();

        handle_update_confirmed(&mut catalog, &notifier, CourseId(3), false);

        assert_eq!(catalog.get(CourseId(3)).map(|c| c.published), Some(false));
        assert!(matches!(
            inbox.try_recv(),
            Ok(Command::Show(n)) if n.kind() == Kind::Info
        ));
    }

    #[test]
    fn simulated_failure_uses_custom_title() {
        let (notifier, mut inbox) = Notifier::channel();
        handle_simulated_failure(&notifier);

        match inbox.try_recv() {
            Ok(Command::Show(notification)) => {
                assert_eq!(notification.kind(), Kind::Error);
                assert_eq!(notification.title(), "Network error");
            }
            other => panic!("expected an error toast, got {other:?}"),
        }
    }

    #[test]
    fn maintenance_warning_is_persistent() {
        let (notifier, mut inbox) = Notifier::channel();
        handle_raise_warning(&notifier);

        assert!(matches!(
            inbox.try_recv(),
            Ok(Command::Show(n)) if n.lifetime().is_persistent()
        ));
    }
}

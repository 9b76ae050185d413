use crate::config;
use crate::pages::portal::utils::{category_label, date_range_label, StatusView};
use crate::store::LeaveApplication;
use leptos::*;

#[component]
pub fn StatusBlock(status: StatusView) -> impl IntoView {
    match status {
        StatusView::Pending => view! {
            <div class="status-row flex items-center gap-3 rounded-md bg-status-warning-bg text-status-warning-text px-4 py-3">
                <i class="fas fa-hourglass-half"></i>
                <p class="text-sm font-medium">{"Pending review"}</p>
            </div>
        }
        .into_view(),
        StatusView::Approved { approved_on } => view! {
            <div id="approvalBlock" class="status-row flex items-center gap-3 rounded-md bg-status-success-bg text-status-success-text px-4 py-3">
                <i class="fas fa-check-circle"></i>
                <p class="text-sm font-medium">
                    {"Approved on "}<span id="approvedDate">{approved_on}</span>
                </p>
            </div>
        }
        .into_view(),
        StatusView::Rejected { reason } => view! {
            <div id="rejectedBlock" class="status-row flex items-center gap-3 rounded-md bg-status-error-bg text-status-error-text px-4 py-3">
                <i class="fas fa-times-circle"></i>
                <p class="text-sm font-medium">
                    {"Rejected: "}<span id="rejectedReason">{reason}</span>
                </p>
            </div>
        }
        .into_view(),
    }
}

fn application_summary(app: &LeaveApplication) -> View {
    let attachments = [app.document.clone(), app.voice.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    view! {
        <dl class="grid grid-cols-2 gap-x-4 gap-y-1 text-sm text-fg-muted">
            <dt>{"Dates"}</dt>
            <dd class="text-fg">{date_range_label(app)}</dd>
            <dt>{"Category"}</dt>
            <dd class="text-fg">{category_label(&app.category).to_string()}</dd>
            <dt>{"Applies to"}</dt>
            <dd class="text-fg">{app.scope.clone()}</dd>
            {(!attachments.is_empty()).then(|| view! {
                <dt>{"Attachments"}</dt>
                <dd class="text-fg">{attachments}</dd>
            })}
        </dl>
    }
    .into_view()
}

#[component]
pub fn StatusPanel(latest: Signal<Option<LeaveApplication>>) -> impl IntoView {
    let tz = config::current_time_zone();
    view! {
        <section id="statusPanel" class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">{"Application status"}</h2>
            {move || match latest.get() {
                Some(app) => {
                    let status = StatusView::from_application(&app, tz);
                    view! {
                        <div class="space-y-3">
                            <StatusBlock status=status />
                            {application_summary(&app)}
                        </div>
                    }
                    .into_view()
                }
                None => view! {
                    <div class="text-center py-8 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
                        <p class="text-sm font-semibold text-fg">{"No applications yet"}</p>
                        <p class="mt-1 text-sm text-fg-muted">
                            {"Submitted requests will show their status here."}
                        </p>
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::store::test_support::{application, at};
    use crate::store::LeaveStatus;
    use crate::test_support::ssr::render_to_string;

    fn render(app: Option<LeaveApplication>) -> String {
        render_to_string(move || {
            let latest = create_rw_signal(app);
            view! { <StatusPanel latest=latest.into() /> }
        })
    }

    #[test]
    fn empty_panel_shows_placeholder() {
        let html = render(None);
        assert!(html.contains("No applications yet"));
        assert!(!html.contains("status-row"));
    }

    #[test]
    fn pending_application_shows_only_pending_block() {
        let html = render(Some(application(1, "a@b.com")));
        assert!(html.contains("Pending review"));
        assert!(!html.contains("approvalBlock"));
        assert!(!html.contains("rejectedBlock"));
        assert!(html.contains("2024-01-05 to 2024-01-10"));
        assert!(html.contains("Medical"));
    }

    #[test]
    fn approved_application_shows_date() {
        let mut app = application(1, "a@b.com");
        app.status = LeaveStatus::Approved;
        app.approved_at = Some(at(60 * 24));
        let html = render(Some(app));
        assert!(html.contains("approvalBlock"));
        assert!(html.contains("05 Jan 2024"));
        assert!(!html.contains("Pending review"));
    }

    #[test]
    fn rejected_application_shows_reason_or_fallback() {
        let mut app = application(1, "a@b.com");
        app.status = LeaveStatus::Rejected;
        app.rejection_reason = Some("Demo rejection reason".into());
        let html = render(Some(app.clone()));
        assert!(html.contains("rejectedBlock"));
        assert!(html.contains("Demo rejection reason"));

        app.rejection_reason = None;
        let html = render(Some(app));
        assert!(html.contains("No reason provided"));
    }

    #[test]
    fn attachments_are_listed_by_name() {
        let mut app = application(1, "a@b.com");
        app.document = Some("certificate.pdf".into());
        app.voice = Some("note.m4a".into());
        let html = render(Some(app));
        assert!(html.contains("certificate.pdf, note.m4a"));
    }
}

use leptos::*;

/// Blocking validation feedback shown above a form.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2" role="alert">
                <div class="font-bold">{move || error.get().unwrap_or_default()}</div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some("End date must be after start date".to_string()));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("End date must be after start date"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}

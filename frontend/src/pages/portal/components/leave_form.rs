use crate::components::error::InlineErrorMessage;
use crate::pages::portal::utils::{LEAVE_CATEGORIES, LEAVE_SCOPES};
use crate::pages::portal::view_model::PortalViewModel;
use leptos::{html, *};
use web_sys::HtmlInputElement;

fn selected_file_name(ev: &leptos::ev::Event) -> Option<String> {
    event_target::<HtmlInputElement>(ev)
        .files()
        .and_then(|files| files.get(0))
        .map(|file| file.name())
}

#[component]
pub fn LeaveForm(vm: PortalViewModel) -> impl IntoView {
    let state = vm.leave_form;
    let form_ref = create_node_ref::<html::Form>();
    let error = Signal::derive(move || vm.leave_message.get().error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.submit_leave().is_some() {
            // File inputs cannot be cleared through their value binding.
            if let Some(form) = form_ref.get() {
                form.reset();
            }
        }
    };

    let start_signal = state.start_signal();
    let end_signal = state.end_signal();
    let category_signal = state.category_signal();
    let reason_signal = state.reason_signal();
    let document_signal = state.document_signal();
    let voice_signal = state.voice_signal();
    let scope_signal = state.scope_signal();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">{"Apply for leave"}</h2>
                <p class="text-sm text-fg-muted">
                    {"Choose the dates and category, then attach any supporting files."}
                </p>
            </div>
            <InlineErrorMessage error=error />
            <form id="leaveForm" class="space-y-4" node_ref=form_ref on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label for="startDate" class="block text-sm font-medium text-fg">{"Start date"}</label>
                        <input
                            id="startDate"
                            name="startDate"
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_signal.get()
                            on:input=move |ev| start_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="endDate" class="block text-sm font-medium text-fg">{"End date"}</label>
                        <input
                            id="endDate"
                            name="endDate"
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || end_signal.get()
                            on:input=move |ev| end_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label for="category" class="block text-sm font-medium text-fg">{"Category"}</label>
                        <select
                            id="category"
                            name="category"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || category_signal.get()
                            on:change=move |ev| category_signal.set(event_target_value(&ev))
                        >
                            {LEAVE_CATEGORIES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label for="scope" class="block text-sm font-medium text-fg">{"Applies to"}</label>
                        <select
                            id="scope"
                            name="scope"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || scope_signal.get()
                            on:change=move |ev| scope_signal.set(event_target_value(&ev))
                        >
                            {LEAVE_SCOPES
                                .iter()
                                .map(|scope| view! { <option value=*scope>{*scope}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div>
                    <label for="reason" class="block text-sm font-medium text-fg">{"Reason"}</label>
                    <textarea
                        id="reason"
                        name="reason"
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label for="document" class="block text-sm font-medium text-fg">{"Supporting document (optional)"}</label>
                        <input
                            id="document"
                            name="document"
                            type="file"
                            class="mt-1 block w-full text-sm"
                            on:change=move |ev| document_signal.set(selected_file_name(&ev))
                        />
                    </div>
                    <div>
                        <label for="voice" class="block text-sm font-medium text-fg">{"Voice note (optional)"}</label>
                        <input
                            id="voice"
                            name="voice"
                            type="file"
                            accept="audio/*"
                            class="mt-1 block w-full text-sm"
                            on:change=move |ev| voice_signal.set(selected_file_name(&ev))
                        />
                    </div>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                >
                    {"Submit application"}
                </button>
            </form>
        </section>
    }
}

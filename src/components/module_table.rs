//! Module Table Component
//!
//! Module list with done icons and the "hide completed" filter. Rows carry
//! the filter mode as a class so only interactive toggles animate.

use leptos::prelude::*;
use view_sync::view::TableRow;
use view_sync::FilterMode;

use crate::context::use_app_context;
use crate::store::{read_view, use_app_store};

#[component]
pub fn ModuleTable() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let rows = move || read_view(&store, |view| view.modules.rows.clone());
    let hide_completed = move || read_view(&store, |view| view.modules.hide_completed);
    let table_class = move || match read_view(&store, |view| view.modules.mode) {
        FilterMode::Fast => "module-table fast",
        FilterMode::Animated => "module-table animated",
    };

    view! {
        <div class="module-list">
            <div class="module-toolbar">
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        id="hideDone"
                        prop:checked=hide_completed
                        on:change=move |ev| ctx.toggle_filter(event_target_checked(&ev))
                    />
                    "Erledigte ausblenden"
                </label>
            </div>

            <table class=table_class>
                <tbody>
                    {move || rows().into_iter().map(|row| match row {
                        TableRow::Header { title } => view! {
                            <tr class="group-header">
                                <th colspan="2">{title}</th>
                            </tr>
                        }.into_any(),
                        TableRow::Module(module) => {
                            let id = module.id;
                            let row_class = if module.hidden { "module-row hidden" } else { "module-row" };
                            let (icon_class, icon) = if module.checked {
                                ("done-icon checked", "☑")
                            } else {
                                ("done-icon unchecked", "☐")
                            };
                            view! {
                                <tr id=format!("module-{}", id) class=row_class>
                                    <td>
                                        <button class=icon_class on:click=move |_| ctx.toggle_done(id)>
                                            {icon}
                                        </button>
                                    </td>
                                    <td class="module-name">{module.name}</td>
                                </tr>
                            }.into_any()
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

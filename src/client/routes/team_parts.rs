use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::components::Page,
    model::catalog::{GeneralPreview, TeamPartCategory},
};

#[component]
pub fn TeamParts() -> Element {
    let mut selected = use_signal(|| TeamPartCategory::Backgrounds);
    let mut parts = use_signal(Vec::<GeneralPreview>::new);

    // Refetch whenever the selected tab changes
    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        use dioxus_logger::tracing;

        let category = selected();
        match crate::client::util::api::get_team_parts(category).await {
            Ok(list) => parts.set(list),
            Err(err) => tracing::error!("{}", err),
        }
    });

    rsx!(
        Title { "Team Parts | EXVS Card" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                div { role: "tablist", class: "tabs tabs-boxed",
                    for category in TeamPartCategory::ALL {
                        a {
                            key: "{category.slug()}",
                            role: "tab",
                            class: if selected() == category { "tab tab-active" } else { "tab" },
                            onclick: move |_| {
                                parts.set(Vec::new());
                                selected.set(category);
                            },
                            "{category.label()}"
                        }
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Id" }
                                th { "Name" }
                            }
                        }
                        tbody {
                            for part in parts.read().iter() {
                                tr { key: "{part.id}",
                                    td { "{part.id}" }
                                    td { "{part.value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

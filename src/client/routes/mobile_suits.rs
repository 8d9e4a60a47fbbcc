use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{client::components::Page, model::catalog::MobileSuitDto};

/// Mobile suits matching a case-insensitive filter on id or any localized name
pub fn filter_mobile_suits<'a>(suits: &'a [MobileSuitDto], filter: &str) -> Vec<&'a MobileSuitDto> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return suits.iter().collect();
    }

    suits
        .iter()
        .filter(|suit| {
            suit.id.to_string().contains(&needle)
                || suit.name_en.to_lowercase().contains(&needle)
                || suit.name_jp.to_lowercase().contains(&needle)
                || suit.name_cn.to_lowercase().contains(&needle)
        })
        .collect()
}

#[component]
pub fn MobileSuits() -> Element {
    let mut suits = use_signal(Vec::<MobileSuitDto>::new);
    let mut filter = use_signal(String::new);

    #[cfg(feature = "web")]
    use_future(move || async move {
        use dioxus_logger::tracing;

        match crate::client::util::api::get_mobile_suits().await {
            Ok(list) => suits.set(list),
            Err(err) => tracing::error!("{}", err),
        }
    });

    let suits = suits.read();
    let visible = filter_mobile_suits(&suits, &filter.read());

    rsx!(
        Title { "Mobile Suits | EXVS Card" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                input {
                    class: "input input-bordered w-full max-w-96",
                    placeholder: "Filter by id or name",
                    value: "{filter}",
                    oninput: move |e| filter.set(e.value()),
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Id" }
                                th { "English" }
                                th { "Japanese" }
                                th { "Chinese" }
                            }
                        }
                        tbody {
                            for suit in visible {
                                tr { key: "{suit.id}",
                                    td { "{suit.id}" }
                                    td { "{suit.name_en}" }
                                    td { "{suit.name_jp}" }
                                    td { "{suit.name_cn}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

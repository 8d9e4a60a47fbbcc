use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaUsers, FaRobot};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "EXVS Card Home" }
        Meta {
            name: "description",
            content: "Card save and progression server for arcade versus cabinets."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "EXVS Card"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p {
                        "Cabinets report battle results to this server, which keeps each card's pilot and user documents up to date. Use the pages below to browse the reference catalog and to edit the display settings of a card's tag teams."
                    }
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link { to: Route::MobileSuits {},
                            button {
                                class: "btn btn-outline w-48 flex gap-2",
                                Icon { width: 24, height: 24, icon: FaRobot }
                                p { "Mobile Suits" }
                            }
                        }
                    }
                    li {
                        Link { to: Route::TeamEditor {},
                            button {
                                class: "btn btn-outline w-48 flex gap-2",
                                Icon { width: 24, height: 24, icon: FaUsers }
                                p { "Team Editor" }
                            }
                        }
                    }
                    li {
                        a { href: "/api/docs",
                            button {
                                class: "btn btn-secondary w-48 flex gap-2",
                                Icon { width: 24, height: 24, icon: FaBook }
                                p { "API Docs" }
                            }
                        }
                    }
                }
            }
        }
    )
}

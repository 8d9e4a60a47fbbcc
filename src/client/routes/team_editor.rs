use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::components::Page,
    model::card::{TeamDto, UpsertTeamsRequest},
};

/// Build the upsert request from the editor's form state
pub fn build_request(access_code: &str, chip_id: &str, teams: &[TeamDto]) -> UpsertTeamsRequest {
    UpsertTeamsRequest {
        access_code: access_code.trim().to_string(),
        chip_id: chip_id.trim().to_string(),
        teams: teams.to_vec(),
    }
}

fn parse_or_zero(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

#[component]
pub fn TeamEditor() -> Element {
    let mut access_code = use_signal(String::new);
    let mut chip_id = use_signal(String::new);
    let mut teams = use_signal(|| vec![TeamDto::default()]);
    let mut status = use_signal(|| None::<Result<String, String>>);

    let submit = move |_| {
        let request = build_request(&access_code.read(), &chip_id.read(), &teams.read());

        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::util::api::upsert_teams(&request).await {
                Ok(_) => status.set(Some(Ok("Teams saved".to_string()))),
                Err(err) => status.set(Some(Err(err))),
            }
        });

        #[cfg(not(feature = "web"))]
        {
            let _ = request;
            status.set(None);
        }
    };

    rsx!(
        Title { "Teams | EXVS Card" }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-[1080px]",
                div { class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Tag Teams" }
                    div { class: "flex flex-wrap gap-2",
                        input {
                            class: "input input-bordered",
                            placeholder: "Access code",
                            value: "{access_code}",
                            oninput: move |e| access_code.set(e.value()),
                        }
                        input {
                            class: "input input-bordered",
                            placeholder: "Chip id",
                            value: "{chip_id}",
                            oninput: move |e| chip_id.set(e.value()),
                        }
                    }
                    div { class: "overflow-x-auto",
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "Team id" }
                                    th { "Name" }
                                    th { "Background" }
                                    th { "Emblem" }
                                    th { "Effect" }
                                    th { "Name color" }
                                    th { "BGM" }
                                    th { "Online" }
                                    th {}
                                }
                            }
                            tbody {
                                for (i, team) in teams.read().iter().cloned().enumerate() {
                                    tr { key: "{i}",
                                        td {
                                            input {
                                                class: "input input-xs w-20",
                                                value: "{team.id}",
                                                oninput: move |e| teams.write()[i].id = parse_or_zero(&e.value()),
                                            }
                                        }
                                        td {
                                            input {
                                                class: "input input-xs w-40",
                                                value: "{team.name}",
                                                oninput: move |e| teams.write()[i].name = e.value(),
                                            }
                                        }
                                        td {
                                            input {
                                                class: "input input-xs w-16",
                                                value: "{team.background_parts_id}",
                                                oninput: move |e| teams.write()[i].background_parts_id = parse_or_zero(&e.value()),
                                            }
                                        }
                                        td {
                                            input {
                                                class: "input input-xs w-16",
                                                value: "{team.emblem_id}",
                                                oninput: move |e| teams.write()[i].emblem_id = parse_or_zero(&e.value()),
                                            }
                                        }
                                        td {
                                            input {
                                                class: "input input-xs w-16",
                                                value: "{team.effect_id}",
                                                oninput: move |e| teams.write()[i].effect_id = parse_or_zero(&e.value()),
                                            }
                                        }
                                        td {
                                            input {
                                                class: "input input-xs w-16",
                                                value: "{team.name_color_id}",
                                                oninput: move |e| teams.write()[i].name_color_id = parse_or_zero(&e.value()),
                                            }
                                        }
                                        td {
                                            input {
                                                class: "input input-xs w-16",
                                                value: "{team.bgm_id}",
                                                oninput: move |e| teams.write()[i].bgm_id = parse_or_zero(&e.value()),
                                            }
                                        }
                                        td {
                                            input {
                                                r#type: "checkbox",
                                                class: "checkbox checkbox-sm",
                                                checked: team.online_tag,
                                                onchange: move |e| teams.write()[i].online_tag = e.checked(),
                                            }
                                        }
                                        td {
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                onclick: move |_| {
                                                    teams.write().remove(i);
                                                },
                                                Icon { width: 14, height: 14, icon: FaTrash }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "flex gap-2 justify-end",
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: move |_| teams.write().push(TeamDto::default()),
                            Icon { width: 16, height: 16, icon: FaPlus }
                            p { "Add team" }
                        }
                        button {
                            class: "btn btn-primary flex gap-2",
                            onclick: submit,
                            Icon { width: 16, height: 16, icon: FaFloppyDisk }
                            p { "Save" }
                        }
                    }
                    {match status() {
                        Some(Ok(message)) => rsx!(div { class: "alert alert-success", "{message}" }),
                        Some(Err(err)) => rsx!(div { class: "alert alert-error", "{err}" }),
                        None => rsx!(),
                    }}
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect credentials to be trimmed and teams copied as entered
    #[test]
    fn builds_trimmed_request() {
        let teams = vec![TeamDto {
            id: 4,
            name: "ACE".to_string(),
            online_tag: true,
            ..Default::default()
        }];

        let request = build_request(" 0123 ", "CHIP\n", &teams);

        assert_eq!(request.access_code, "0123");
        assert_eq!(request.chip_id, "CHIP");
        assert_eq!(request.teams, teams);
    }

    /// Expect unparsable numeric input to fall back to the placeholder id
    #[test]
    fn non_numeric_input_is_zero() {
        assert_eq!(parse_or_zero("12"), 12);
        assert_eq!(parse_or_zero("abc"), 0);
        assert_eq!(parse_or_zero(""), 0);
    }
}

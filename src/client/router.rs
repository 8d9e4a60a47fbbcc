use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, MobileSuits, NotFound, TeamEditor, TeamParts},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/mobile-suits")]
    MobileSuits {},

    #[route("/team-parts")]
    TeamParts {},

    #[route("/teams")]
    TeamEditor {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

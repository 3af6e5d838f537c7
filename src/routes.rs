use dioxus::prelude::*;
use crate::views::{ About, Contact, Home, Navbar, Projects };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/about")]
    About,
    #[route("/projects")]
    Projects,
    #[route("/contact")]
    Contact,
}

pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::config::PickerConfig;
use crate::pages::picker::NamePicker;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[not_found]
   #[at("/404")] NotFound,
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    pub config: PickerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| switch(route, &config)} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route, config: &PickerConfig) -> Html {
   match route {
       Route::Home => html! { <NamePicker config={config.clone()} /> },
       Route::NotFound => html! {
           <div class="min-h-screen flex flex-col items-center justify-center gap-2">
               <p class={styles::TEXT_BODY}>{"Nothing to spin here."}</p>
               <Link<Route> to={Route::Home} classes={classes!(styles::LINK)}>{"Back to the wheels"}</Link<Route>>
           </div>
       },
   }
}

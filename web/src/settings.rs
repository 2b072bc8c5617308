use crate::theme::Theme;
use crate::utils::*;
use nonoguramu_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub size: game::Coord2,
}

impl Settings {
    pub(crate) fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { size: (10, 10) }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "nonoguramu:settings";
}

const SIZE_PRESETS: [(game::Coord2, &str); 3] = [
    ((5, 5), "5 × 5"),
    ((10, 10), "10 × 10"),
    ((15, 15), "15 × 15"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_update: Callback<Settings>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let theme_link = |label: &'static str, theme: Option<Theme>| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            Theme::apply(theme);
        });
        html! { <li><a href="#" {onclick}>{label}</a></li> }
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <h3>{"Board size"}</h3>
                <ul>
                    {
                        for SIZE_PRESETS.iter().map(|&(size, label)| {
                            let on_update = props.on_update.clone();
                            let current = props.settings.size == size;
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_update.emit(Settings { size });
                            });
                            html! {
                                <li>
                                    <a href="#" class={current.then_some("current")} {onclick}>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                    }
                </ul>
                <h3>{"Theme"}</h3>
                <ul>
                    {theme_link("Auto", None)}
                    {theme_link("Light", Some(Theme::Light))}
                    {theme_link("Dark", Some(Theme::Dark))}
                </ul>
            </article>
        </dialog>
    }
}

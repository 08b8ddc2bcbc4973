use numerica_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum MenuView {
    Main,
    LevelSelect,
}

impl Default for MenuView {
    fn default() -> Self {
        Self::Main
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MenuProps {
    pub view: MenuView,
    /// Every level of the campaign, in play order.
    pub levels: Vec<game::LevelId>,
    pub unlocked: Vec<game::LevelId>,
    pub can_resume: bool,
    pub on_start: Callback<()>,
    pub on_resume: Callback<()>,
    pub on_show: Callback<MenuView>,
    pub on_select: Callback<game::LevelId>,
}

#[function_component(MainMenu)]
pub(crate) fn main_menu(props: &MenuProps) -> Html {
    let MenuProps {
        view,
        levels,
        unlocked,
        can_resume,
        on_start,
        on_resume,
        on_show,
        on_select,
    } = props.clone();

    match view {
        MenuView::Main => {
            let start = on_start.reform(|_: MouseEvent| ());
            let resume = on_resume.reform(|_: MouseEvent| ());
            let show_levels = on_show.reform(|_: MouseEvent| MenuView::LevelSelect);
            html! {
                <div class="main-menu">
                    <div class="main-options">
                        <button onclick={start}>{"Start"}</button>
                        <button onclick={resume} disabled={!can_resume}>{"Resume"}</button>
                        <button onclick={show_levels}>{"Level Select"}</button>
                    </div>
                </div>
            }
        }
        MenuView::LevelSelect => {
            let back = on_show.reform(|_: MouseEvent| MenuView::Main);
            html! {
                <div class="main-menu">
                    <h2>{"Select Level"}</h2>
                    <div class="level-selection">
                        {
                            for levels.into_iter().map(|level| {
                                let is_unlocked = unlocked.contains(&level);
                                let class = if is_unlocked { "unlocked" } else { "locked" };
                                let onclick = on_select.reform(move |_: MouseEvent| level);
                                html! {
                                    <button key={level} {class} {onclick} disabled={!is_unlocked}>
                                        {format!("Level {}", level)}
                                    </button>
                                }
                            })
                        }
                    </div>
                    <button onclick={back} class="back-button">{"Back to Main"}</button>
                </div>
            }
        }
    }
}

use numerica_core as game;
use yew::prelude::*;

fn button_state_class(state: game::ButtonState) -> &'static str {
    use game::ButtonState::*;
    match state {
        Pressable => "button--pressable",
        WasPressed => "button--was-pressed",
        Disabled => "button--disabled",
        Error => "button--error",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ButtonProps {
    button: game::Button,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::ButtonId>,
}

#[function_component(ButtonView)]
fn button_component(props: &ButtonProps) -> Html {
    let ButtonProps {
        button,
        locked,
        callback,
    } = props.clone();

    let class = classes!("button", button_state_class(button.state));
    let disabled = locked || !button.state.is_pressable();
    let id = button.id;
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("button {} clicked", id);
        callback.emit(id);
    });

    html! {
        <button {class} {disabled} {onclick}>
            <span class="button-label">{button.label}</span>
        </button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct RulesProps {
    lines: Vec<game::RuleLine>,
}

#[function_component(RulesView)]
fn rules_component(props: &RulesProps) -> Html {
    html! {
        <div class="rules-container">
            <h3>{"Rules:"}</h3>
            <ol>
                {
                    for props.lines.iter().map(|line| {
                        let class = matches!(line, game::RuleLine::Masked).then_some("masked");
                        html! { <li {class}>{line.text()}</li> }
                    })
                }
            </ol>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct LevelProps {
    pub level: game::LevelId,
    pub phase: game::GamePhase,
    pub buttons: Vec<game::Button>,
    pub rules: Vec<game::RuleLine>,
    pub clickable: bool,
    #[prop_or_default]
    pub message: Option<game::Message>,
    pub on_press: Callback<game::ButtonId>,
    pub on_restart: Callback<()>,
    pub on_advance: Callback<()>,
    pub on_menu: Callback<()>,
}

fn message_class(message: Option<game::Message>) -> Classes {
    classes!(
        "message",
        message.is_some_and(game::Message::is_error).then_some("error"),
        message.is_none().then_some("hidden"),
    )
}

#[function_component(LevelView)]
pub(crate) fn level_component(props: &LevelProps) -> Html {
    let LevelProps {
        level,
        phase,
        buttons,
        rules,
        clickable,
        message,
        on_press,
        on_restart,
        on_advance,
        on_menu,
    } = props.clone();

    let locked = !clickable;
    let text = message.map(|message| message.to_string()).unwrap_or_default();
    let class = message_class(message);

    let restart = on_restart.reform(|_: MouseEvent| ());
    let advance = on_advance.reform(|_: MouseEvent| ());
    let menu = on_menu.reform(|_: MouseEvent| ());

    html! {
        <div class="game-container">
            <div class="grid-item empty-area"></div>
            <div class="grid-item level-header"><h2>{format!("Level {}", level)}</h2></div>
            <div class="grid-item rules-box"><RulesView lines={rules}/></div>
            <div class="grid-item puzzle-box">
                <div class={classes!("puzzle", clickable.then_some("playable"))}>
                    {
                        for buttons.into_iter().map(|button| {
                            let key = button.id;
                            let callback = on_press.clone();
                            html! {
                                <ButtonView key={key} {button} {locked} {callback}/>
                            }
                        })
                    }
                </div>
            </div>
            <div class="grid-item message-box"><p {class}>{text}</p></div>
            <div class="grid-item actions-box">
                {
                    match phase {
                        game::GamePhase::LevelFailed => html! {
                            <button class="restart-button" onclick={restart}>{"Restart"}</button>
                        },
                        game::GamePhase::LevelComplete => html! {
                            <button class="next-button" onclick={advance}>{"Next Level"}</button>
                        },
                        game::GamePhase::Playing | game::GamePhase::Menu => html! {},
                    }
                }
            </div>
            <div class="grid-item main-menu-button-box">
                <button onclick={menu} class="main-menu-button">{"Main Menu"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_classes_follow_state() {
        assert_eq!(
            button_state_class(game::ButtonState::WasPressed),
            "button--was-pressed"
        );
        assert_eq!(button_state_class(game::ButtonState::Error), "button--error");
    }

    fn level_props(phase: game::GamePhase, message: Option<game::Message>) -> LevelProps {
        let registry = game::LevelRegistry::standard();
        let level = registry.get(103).unwrap();
        LevelProps {
            level: level.id,
            phase,
            buttons: level.layout().to_vec(),
            rules: level.rule_lines(&game::RevealedRules::new()),
            clickable: !matches!(
                phase,
                game::GamePhase::LevelComplete | game::GamePhase::LevelFailed
            ),
            message,
            on_press: Callback::noop(),
            on_restart: Callback::noop(),
            on_advance: Callback::noop(),
            on_menu: Callback::noop(),
        }
    }

    #[test]
    fn level_view_builds_for_every_phase() {
        let failed = game::Message::Failed("Cannot press adjacent button!");
        for (phase, message) in [
            (game::GamePhase::Playing, None),
            (game::GamePhase::LevelFailed, Some(failed)),
            (game::GamePhase::LevelComplete, Some(game::Message::LevelComplete(103))),
        ] {
            let props = level_props(phase, message);
            assert_eq!(props.buttons.len(), 5);

            let node = html! { <LevelView ..props.clone() /> };
            assert!(matches!(node, Html::VComp(_)));
        }
    }

    #[test]
    fn message_box_styles_errors_and_empty_state() {
        let error = message_class(Some(game::Message::Failed("Incorrect button pressed!")));
        let done = message_class(Some(game::Message::LevelComplete(1)));
        let empty = message_class(None);

        assert!(error.contains("error"));
        assert!(!done.contains("error"));
        assert!(!done.contains("hidden"));
        assert!(empty.contains("hidden"));
    }
}

use crate::level::LevelView;
use crate::menu::{MainMenu, MenuView};
use crate::storage::LocalProgressStore;
use numerica_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartGame,
    ResumeGame,
    ShowMenu(MenuView),
    SelectLevel(game::LevelId),
    Press(game::ButtonId),
    Restart,
    Advance,
    BackToMenu,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct AppProps {
    #[prop_or_default]
    pub campaign: game::Campaign,
}

/// Play session state behind the top-level view.
#[derive(Debug)]
pub(crate) struct Session<S> {
    game: game::GameController<S>,
    revealed: game::RevealedRules,
    menu_view: MenuView,
}

/// Logs a failed transition and reports whether anything changed.
fn apply(result: game::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err @ game::GameError::UnknownLevel(_)) => {
            log::error!("level configuration error: {}", err);
            false
        }
        Err(err) => {
            log::warn!("{}", err);
            false
        }
    }
}

impl<S: game::ProgressStore> Session<S> {
    pub(crate) fn new(campaign: game::Campaign, store: S) -> Self {
        Self {
            game: game::GameController::new(game::LevelRegistry::new(campaign), store),
            revealed: game::RevealedRules::new(),
            menu_view: Default::default(),
        }
    }

    /// Applies one message; returns whether the view needs a re-render.
    pub(crate) fn handle(&mut self, msg: Msg) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            StartGame => apply(self.game.start_game()),
            ResumeGame => apply(self.game.resume()),
            ShowMenu(view) => {
                let changed = self.menu_view != view;
                self.menu_view = view;
                changed
            }
            SelectLevel(level) => {
                let updated = apply(self.game.select_level(level));
                if updated {
                    self.menu_view = MenuView::Main;
                }
                updated
            }
            Press(id) => match self.game.press(id, &mut self.revealed) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::debug!("press {} ignored: {}", id, err);
                    false
                }
            },
            Restart => apply(self.game.restart()),
            Advance => match self.game.advance() {
                Ok(phase) => {
                    log::debug!("advanced to {:?}", phase);
                    true
                }
                Err(err) => {
                    log::warn!("{}", err);
                    false
                }
            },
            BackToMenu => {
                let was_in_level = self.game.phase().is_in_level();
                self.game.return_to_menu();
                self.menu_view = MenuView::Main;
                was_in_level
            }
        }
    }
}

/// Top-level view over a browser-backed session.
#[derive(Debug)]
pub(crate) struct App {
    session: Session<LocalProgressStore>,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let campaign = ctx.props().campaign;
        Self {
            session: Session::new(campaign, LocalProgressStore::for_campaign(campaign)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.session.handle(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let link = ctx.link();
        let Session {
            game,
            revealed,
            menu_view,
        } = &self.session;
        let Some(attempt) = game.attempt() else {
            return html! {
                <div class="App">
                    <MainMenu
                        view={*menu_view}
                        levels={game.registry().levels().to_vec()}
                        unlocked={game.unlocked().to_vec()}
                        can_resume={game.can_resume()}
                        on_start={link.callback(|()| StartGame)}
                        on_resume={link.callback(|()| ResumeGame)}
                        on_show={link.callback(ShowMenu)}
                        on_select={link.callback(SelectLevel)}
                    />
                </div>
            };
        };

        html! {
            <div class="App">
                <LevelView
                    level={attempt.level_id()}
                    phase={game.phase()}
                    buttons={attempt.buttons().to_vec()}
                    rules={attempt.level().rule_lines(revealed)}
                    clickable={game.is_clickable()}
                    message={game.message()}
                    on_press={link.callback(Press)}
                    on_restart={link.callback(|()| Restart)}
                    on_advance={link.callback(|()| Advance)}
                    on_menu={link.callback(|()| BackToMenu)}
                />
            </div>
        }
    }
}

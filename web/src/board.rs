use crate::api::{DEFAULT_API_URL, JServiceClient};
use crate::utils::*;
use clap::Args;
use jeopardy_core as game;
use game::{BoardGrid, CellPos, GamePhase, GridCell, RevealState};
use rand::prelude::*;
use yew::prelude::*;

pub(crate) enum Msg {
    NewGame,
    Loaded(game::LoadTicket, game::Result<game::Board>),
    Reveal(CellPos),
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    pos: CellPos,
    showing: RevealState,
    text: String,
    callback: Callback<CellPos>,
}

#[function_component(ClueCell)]
fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        pos,
        showing,
        text,
        callback,
    } = props.clone();

    let class = classes!(
        "clue",
        match showing {
            RevealState::Unrevealed => "unrevealed",
            RevealState::QuestionShown => "question",
            RevealState::AnswerShown => "answer",
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} click", pos);
        callback.emit(pos);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Base url of the trivia api
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub(crate) struct BoardView {
    session: game::GameSession,
    client: JServiceClient,
    config: game::BoardConfig,
}

impl BoardView {
    fn start_game(&mut self, ctx: &Context<Self>) {
        let ticket = self.session.begin_load();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("new game {:?}, seed: {}", ticket, seed);

        let client = self.client.clone();
        let config = self.config;
        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = game::setup_board(&client, &mut rng, &config).await;
            Msg::Loaded(ticket, result)
        });
    }

    fn view_cell(ctx: &Context<Self>, cell: &GridCell) -> Html {
        match cell {
            GridCell::Clue { pos, showing, text } => {
                let (pos, showing) = (*pos, *showing);
                let text = text.clone();
                let callback = ctx.link().callback(Msg::Reveal);
                html! {
                    <ClueCell {pos} {showing} {text} {callback}/>
                }
            }
            GridCell::Empty => html! { <td class="empty"/> },
        }
    }

    fn view_status(&self) -> Html {
        match self.session.phase() {
            GamePhase::Loading => html! {
                <div id="spin-container"><div class="spinner"/></div>
            },
            GamePhase::Failed(err) => html! {
                <p class="error">{format!("Could not load the board: {}", err)}</p>
            },
            GamePhase::Idle | GamePhase::Ready => html! {},
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        // start right away on page load
        ctx.link().send_message(Msg::NewGame);
        Self {
            session: game::GameSession::new(),
            client: JServiceClient::new(&ctx.props().api_url),
            config: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => {
                self.start_game(ctx);
                true
            }
            Loaded(ticket, result) => {
                self.session.finish_load(ticket, result);
                true
            }
            Reveal(pos) => {
                let outcome = self.session.reveal(pos);
                log::debug!("reveal {:?}: {:?}", pos, outcome);
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let grid = self
            .session
            .board()
            .map(|board| BoardGrid::with_min_rows(board, self.config.clues_per_category))
            .unwrap_or_default();
        let loading = self.session.phase().is_loading();
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="restart" onclick={cb_restart}>{"Restart"}</button>
                </nav>
                {self.view_status()}
                <table class={classes!(loading.then_some("loading"))}>
                    <thead>
                        <tr>
                            { for grid.headers.iter().map(|title| html! { <th>{title.clone()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for grid.rows.iter().map(|row| html! {
                                <tr>
                                    { for row.iter().map(|cell| Self::view_cell(ctx, cell)) }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}

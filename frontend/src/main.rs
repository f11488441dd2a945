use gloo_file::File as GlooFile;
use shared::{screen, Sequencer, SessionState, UploadMeta, VerifyError, VerifyResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

mod api;
mod components;
mod config;

use config::ApiConfig;

enum Msg {
    /// Raw change event from the hidden file input.
    FileChosen(Event),
    /// A submission settled; the ticket identifies which one.
    VerifySettled(u64, Result<VerifyResult, VerifyError>),
}

struct Model {
    session: SessionState,
    tickets: Sequencer,
    config: ApiConfig,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: SessionState::Idle,
            tickets: Sequencer::default(),
            config: ApiConfig::from_window(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(event) => self.handle_file_chosen(ctx, event),
            Msg::VerifySettled(ticket, outcome) => self.handle_verify_settled(ticket, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                { components::render_navbar() }
                <main>
                    { components::render_hero() }
                    { components::render_verify_section(self, ctx) }
                    { components::render_features() }
                </main>
                { components::render_footer() }
            </div>
        }
    }
}

impl Model {
    /// Screens the chosen file and, on acceptance, starts a verification
    /// attempt. Rejection happens entirely here, before any network activity.
    fn handle_file_chosen(&mut self, ctx: &Context<Self>, event: Event) -> bool {
        let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
            return false;
        };
        let Some(file) = input.files().and_then(|list| list.item(0)) else {
            return false;
        };

        if let Err(reason) = screen(file.size() as u64, &file.type_()) {
            log::warn!("rejected {}: {}", file.name(), reason.notice());
            alert(&reason.notice());
            // Clear the control so the same file cannot be resubmitted
            // without a fresh pick.
            input.set_value("");
            return false;
        }

        let file = GlooFile::from(file);
        let meta = UploadMeta {
            name: file.name(),
            size: file.size(),
            mime: file.raw_mime_type(),
        };
        self.session = SessionState::select(meta).start();

        let ticket = self.tickets.begin();
        let endpoint = self.config.analyze_endpoint();
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = api::analyze(&endpoint, &file).await;
            link.send_message(Msg::VerifySettled(ticket, outcome));
        });

        true
    }

    fn handle_verify_settled(
        &mut self,
        ticket: u64,
        outcome: Result<VerifyResult, VerifyError>,
    ) -> bool {
        if !self.tickets.is_current(ticket) {
            // A newer submission superseded this one; its outcome wins.
            log::debug!("discarding settled submission {ticket}");
            return false;
        }
        if let Err(error) = &outcome {
            log::error!("verification failed ({}): {error}", error.kind());
        }
        self.session = std::mem::take(&mut self.session).settle(outcome);
        true
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

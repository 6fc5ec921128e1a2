use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::CalculatorComponent,
};

/// Drives the event loop: terminal events in, rendered frames out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    component: CalculatorComponent,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
}

impl AppRunner {
    /// Runner reading events from the same terminal it draws to.
    pub fn new_with_real(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Result<Self> {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new_with_events(config, tui, events)
    }

    /// Runner with a separate event source, e.g. a scripted queue in tests.
    pub fn new_with_events(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
    ) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config));

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime
            .add_tui_sender(tui_cmd_tx)
            .map_err(|e| eyre!(e))?;
        runtime
            .add_render_request_sender(render_tx)
            .map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            events,
            component: CalculatorComponent::new(),
            tui_cmd_rx,
            render_rx,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        // The first layout needs the real terminal size for mouse hit-testing
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.process_update_cycle();
        self.apply_tui_commands().await?;
        self.render().await?;

        while let Some(event) = self.events.next().await {
            let mut needs_render = match event {
                tui::Event::Render => true,
                tui::Event::Tick => {
                    self.runtime.send_raw_msg(RawMsg::Tick);
                    false
                }
                tui::Event::Quit | tui::Event::Closed => {
                    self.runtime.send_raw_msg(RawMsg::Quit);
                    false
                }
                tui::Event::Resize(w, h) => {
                    self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                    true
                }
                tui::Event::Key(key) => {
                    self.runtime.send_raw_msg(RawMsg::Key(key));
                    true
                }
                tui::Event::Mouse(mouse) => {
                    self.runtime.send_raw_msg(RawMsg::Mouse(mouse));
                    true
                }
                tui::Event::Error => {
                    self.runtime
                        .send_raw_msg(RawMsg::Error("Failed to read terminal event".to_string()));
                    true
                }
                tui::Event::Init
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Paste(_) => false,
            };

            self.process_update_cycle();
            needs_render |= self.apply_tui_commands().await?;
            while self.render_rx.try_recv().is_ok() {
                needs_render = true;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
                needs_render = true;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if needs_render {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn process_update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
    }

    /// Returns whether the terminal changed and needs a redraw
    async fn apply_tui_commands(&mut self) -> Result<bool> {
        let mut last_resize = None;
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => last_resize = Some((width, height)),
            }
        }

        match last_resize {
            Some((width, height)) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        self.tui.lock().await.suspend()?;
        // Execution continues here once the shell resumes the process
        self.tui.lock().await.resume()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.process_update_cycle();
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let component = &self.component;
        let mut tui = self.tui.lock().await;
        tui.draw(&mut |frame: &mut tui::Frame<'_>| {
            let area = frame.area();
            component.view(state, frame, area);
        })?;
        Ok(())
    }
}

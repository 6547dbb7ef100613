use anyhow::Result;
use gt_core::clock::Pacer;
use gt_core::config::PlaybackConfig;
use gt_core::frame::AnimatedImage;
use gt_core::terminal::TerminalInfo;
use gt_core::traits::{CellSink, InputEvent, InputSource};
use gt_palette::scale::compute_scale;
use gt_palette::{CellGrid, FrameSampler, Palette, dominant_color};

/// Tout ce que la boucle de lecture lit, construit une fois avant la lecture.
#[derive(Clone, Copy)]
pub struct PlaybackContext<'a> {
    pub image: &'a AnimatedImage,
    pub terminal: TerminalInfo,
    pub config: &'a PlaybackConfig,
}

/// Raison de l'arrêt de la lecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Touche `q`, `Esc`, `Ctrl-C` ou `Ctrl-D`.
    QuitKey,
    /// SIGINT / SIGTERM.
    Interrupted,
    /// Nombre de boucles configuré atteint.
    LoopsExhausted,
}

/// État de la lecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Stopped(StopReason),
}

/// Boucle d'animation : cadence, annulation, rendu parallèle, flush.
///
/// Une seule frame en vol à la fois : les cellules sont calculées en
/// parallèle, puis envoyées au sink et flushées par ce thread.
pub struct Player<'a, S, I> {
    ctx: PlaybackContext<'a>,
    sink: S,
    input: I,
    interrupts: flume::Receiver<()>,
    sampler: FrameSampler,
    grid: CellGrid,
    state: PlayerState,
    cycles: u64,
}

impl<'a, S: CellSink, I: InputSource> Player<'a, S, I> {
    /// Calcule échelle et couleur dominante, pré-alloue la grille.
    pub fn new(ctx: PlaybackContext<'a>, sink: S, input: I, interrupts: flume::Receiver<()>) -> Self {
        let term = ctx.terminal;
        let scale = compute_scale(
            ctx.image.width(),
            ctx.image.height(),
            term.columns,
            term.rows,
            term.ratio,
        );
        let dominant = dominant_color(ctx.image);
        let palette = Palette::new(ctx.config.legacy_palette_offset);
        log::info!(
            "Lecture : {} frames, grille {}×{} ({} cellules), échelle {:.3}×{:.3}",
            ctx.image.frame_count(),
            term.columns,
            term.rows,
            term.cell_count(),
            scale.x,
            scale.y
        );

        Self {
            ctx,
            sink,
            input,
            interrupts,
            sampler: FrameSampler::new(dominant, scale, term.ratio, palette),
            grid: CellGrid::new(term.columns, term.rows),
            state: PlayerState::Playing,
            cycles: 0,
        }
    }

    /// Joue l'animation jusqu'à l'arrêt.
    ///
    /// Appelé sur un lecteur déjà arrêté, retourne la même raison sans rien rendre.
    ///
    /// # Errors
    /// Returns an error if polling the input or flushing the sink fails.
    pub fn run(&mut self) -> Result<StopReason> {
        if let PlayerState::Stopped(reason) = self.state {
            return Ok(reason);
        }

        let mut pacer = Pacer::start(self.ctx.config.frame_interval());
        loop {
            if let Some(limit) = self.ctx.config.loop_count
                && self.cycles >= limit
            {
                return Ok(self.stop(StopReason::LoopsExhausted));
            }

            for index in 0..self.ctx.image.frame_count() {
                if let Some(reason) = self.check_cancel()? {
                    return Ok(self.stop(reason));
                }
                pacer.wait();
                self.render_frame(index)?;
            }
            self.cycles += 1;
            log::trace!("Cycle {} terminé", self.cycles);
        }
    }

    /// Frontière de frame : signal d'interruption puis file d'entrée, sans bloquer.
    fn check_cancel(&mut self) -> Result<Option<StopReason>> {
        if self.interrupts.try_recv().is_ok() {
            return Ok(Some(StopReason::Interrupted));
        }
        while let Some(event) = self.input.poll()? {
            match event {
                InputEvent::Quit => return Ok(Some(StopReason::QuitKey)),
                InputEvent::Resize(columns, rows) => {
                    log::debug!("Resize {columns}×{rows} ignoré : grille fixée au démarrage");
                }
                InputEvent::Other => {}
            }
        }
        Ok(None)
    }

    fn render_frame(&mut self, index: usize) -> Result<()> {
        let frame = &self.ctx.image.frames()[index];
        self.sampler.sample_frame(frame, &mut self.grid);

        let glyph = self.ctx.config.glyph;
        for (col, row, cell) in self.grid.iter() {
            self.sink.set_cell(col, row, glyph, cell.fg, cell.bg);
        }
        self.sink.flush()
    }

    fn stop(&mut self, reason: StopReason) -> StopReason {
        log::info!("Arrêt de la lecture ({reason:?}) après {} cycles", self.cycles);
        self.state = PlayerState::Stopped(reason);
        reason
    }

    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Cycles complets joués.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::color::{PaletteIndex, Rgba};
    use gt_core::frame::Frame;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Set {
            col: u16,
            row: u16,
            glyph: char,
            fg: PaletteIndex,
            bg: PaletteIndex,
        },
        Flush,
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Call>,
        fail_flush: bool,
    }

    impl RecordingSink {
        fn flushes(&self) -> usize {
            self.calls.iter().filter(|c| **c == Call::Flush).count()
        }
    }

    impl CellSink for RecordingSink {
        fn set_cell(&mut self, col: u16, row: u16, glyph: char, fg: PaletteIndex, bg: PaletteIndex) {
            self.calls.push(Call::Set {
                col,
                row,
                glyph,
                fg,
                bg,
            });
        }

        fn flush(&mut self) -> Result<()> {
            if self.fail_flush {
                anyhow::bail!("terminal fermé");
            }
            self.calls.push(Call::Flush);
            Ok(())
        }
    }

    /// Chaque `poll` consomme une entrée ; `None` ou script vide → rien en attente.
    #[derive(Default)]
    struct ScriptedInput {
        script: VecDeque<Option<InputEvent>>,
    }

    impl ScriptedInput {
        fn new(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
            Self {
                script: script.into_iter().collect(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Result<Option<InputEvent>> {
            Ok(self.script.pop_front().flatten())
        }
    }

    fn red_then_blue() -> AnimatedImage {
        AnimatedImage::new(
            2,
            2,
            vec![
                Frame::filled(2, 2, Rgba::opaque(255, 0, 0)),
                Frame::filled(2, 2, Rgba::opaque(0, 0, 255)),
            ],
        )
        .unwrap()
    }

    fn config(loop_count: Option<u64>) -> PlaybackConfig {
        PlaybackConfig {
            frame_delay_ms: 1,
            loop_count,
            ..PlaybackConfig::default()
        }
    }

    const GRID_2X2: TerminalInfo = TerminalInfo {
        columns: 2,
        rows: 2,
        ratio: 1.0,
    };

    fn no_interrupts() -> flume::Receiver<()> {
        flume::bounded(1).1
    }

    #[test]
    fn one_cycle_red_then_blue() {
        let image = red_then_blue();
        let config = config(Some(1));
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let mut player = Player::new(ctx, RecordingSink::default(), ScriptedInput::default(), no_interrupts());

        assert_eq!(player.run().unwrap(), StopReason::LoopsExhausted);
        assert_eq!(player.state(), PlayerState::Stopped(StopReason::LoopsExhausted));
        assert_eq!(player.cycles(), 1);

        let set = |col, row, color| Call::Set {
            col,
            row,
            glyph: '▄',
            fg: color,
            bg: color,
        };
        // échelle de repli 1×2 : la ligne 0 couvre les deux lignes de pixels,
        // la ligne 1 tombe hors de l'image (noir).
        // frame 0 : rouge = couleur dominante → noir ; frame 1 : bleu (16 + 5 + 1)
        let expected = vec![
            set(0, 0, 17),
            set(1, 0, 17),
            set(0, 1, 17),
            set(1, 1, 17),
            Call::Flush,
            set(0, 0, 22),
            set(1, 0, 22),
            set(0, 1, 17),
            set(1, 1, 17),
            Call::Flush,
        ];
        assert_eq!(player.sink().calls, expected);
    }

    #[test]
    fn zero_loops_renders_nothing() {
        let image = red_then_blue();
        let config = config(Some(0));
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let mut player = Player::new(ctx, RecordingSink::default(), ScriptedInput::default(), no_interrupts());
        assert_eq!(player.run().unwrap(), StopReason::LoopsExhausted);
        assert!(player.sink().calls.is_empty());
        assert_eq!(player.cycles(), 0);
    }

    #[test]
    fn loop_count_counts_full_cycles() {
        let image = red_then_blue();
        let config = config(Some(3));
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let mut player = Player::new(ctx, RecordingSink::default(), ScriptedInput::default(), no_interrupts());
        player.run().unwrap();
        assert_eq!(player.sink().flushes(), 6);

        // frames strictement dans l'ordre : 0, 1, 0, 1, 0, 1
        let fgs: Vec<PaletteIndex> = player
            .sink()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Set { col: 0, row: 0, fg, .. } => Some(*fg),
                _ => None,
            })
            .collect();
        assert_eq!(fgs, vec![17, 22, 17, 22, 17, 22]);
    }

    #[test]
    fn quit_key_stops_at_frame_boundary() {
        let image = red_then_blue();
        let config = config(None);
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        // frontière 1 : rien ; frontière 2 : resize puis quit
        let input = ScriptedInput::new([
            None,
            Some(InputEvent::Resize(100, 30)),
            Some(InputEvent::Quit),
        ]);
        let mut player = Player::new(ctx, RecordingSink::default(), input, no_interrupts());

        assert_eq!(player.run().unwrap(), StopReason::QuitKey);
        assert_eq!(player.sink().flushes(), 1);
        assert_eq!(player.sink().calls.len(), 5);
    }

    #[test]
    fn pending_interrupt_stops_before_rendering() {
        let image = red_then_blue();
        let config = config(None);
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let (tx, rx) = flume::bounded(1);
        tx.send(()).unwrap();
        let mut player = Player::new(ctx, RecordingSink::default(), ScriptedInput::default(), rx);

        assert_eq!(player.run().unwrap(), StopReason::Interrupted);
        assert!(player.sink().calls.is_empty());
    }

    #[test]
    fn interrupt_wins_over_quit_key() {
        let image = red_then_blue();
        let config = config(None);
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let (tx, rx) = flume::bounded(1);
        tx.send(()).unwrap();
        let input = ScriptedInput::new([Some(InputEvent::Quit)]);
        let mut player = Player::new(ctx, RecordingSink::default(), input, rx);
        assert_eq!(player.run().unwrap(), StopReason::Interrupted);
    }

    #[test]
    fn stopped_player_does_not_replay() {
        let image = red_then_blue();
        let config = config(Some(1));
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let mut player = Player::new(ctx, RecordingSink::default(), ScriptedInput::default(), no_interrupts());
        player.run().unwrap();
        let calls = player.sink().calls.len();
        assert_eq!(player.run().unwrap(), StopReason::LoopsExhausted);
        assert_eq!(player.sink().calls.len(), calls);
    }

    #[test]
    fn flush_failure_propagates() {
        let image = red_then_blue();
        let config = config(Some(1));
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let sink = RecordingSink {
            fail_flush: true,
            ..RecordingSink::default()
        };
        let mut player = Player::new(ctx, sink, ScriptedInput::default(), no_interrupts());
        assert!(player.run().is_err());
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn custom_glyph_and_exact_palette() {
        let image = red_then_blue();
        let config = PlaybackConfig {
            glyph: '█',
            legacy_palette_offset: false,
            ..config(Some(1))
        };
        let ctx = PlaybackContext {
            image: &image,
            terminal: GRID_2X2,
            config: &config,
        };
        let mut player = Player::new(ctx, RecordingSink::default(), ScriptedInput::default(), no_interrupts());
        player.run().unwrap();
        assert_eq!(
            player.sink().calls[0],
            Call::Set {
                col: 0,
                row: 0,
                glyph: '█',
                fg: 16,
                bg: 16,
            }
        );
    }
}

//! Audio system using Web Audio API
//!
//! Procedurally generated sound cues - no external files needed!

use crate::sim::Cue;

/// Fire-and-forget cue playback. Failures stay inside the player.
pub trait AudioPlayer {
    fn play(&mut self, cue: Cue);

    /// Unlock playback after a user gesture
    fn resume(&mut self) {}

    /// Cue volume in 0.0 - 1.0, 0 silences everything
    fn set_volume(&mut self, _volume: f32) {}
}

/// Silent player that only logs (native builds and tests)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&mut self, cue: Cue) {
        log::trace!("cue: {}", cue.name());
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::AudioPlayer;
    use crate::settings::Settings;
    use crate::sim::Cue;

    /// Audio manager for the game
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Start - quick upward swoosh
        fn play_start(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                .ok();
            osc.frequency().set_value_at_time(200.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(700.0, t + 0.2)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.3).ok();
        }

        /// Flap - short soft chirp
        fn play_flap(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 500.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.06)
                .ok();
            osc.frequency().set_value_at_time(500.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(900.0, t + 0.05)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.08).ok();
        }

        /// Score - two-note ding
        fn play_score(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [880.0, 1320.0].iter().enumerate() {
                let delay = i as f64 * 0.07;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Hit - solid thump
        fn play_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Die - sad descending
        fn play_die(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 300.0, 200.0].iter().enumerate() {
                let delay = 0.15 + i as f64 * 0.15;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.3).ok();
                }
            }
        }
    }

    impl AudioPlayer for WebAudio {
        fn play(&mut self, cue: Cue) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                Cue::Start => self.play_start(ctx, vol),
                Cue::Flap => self.play_flap(ctx, vol),
                Cue::Score => self.play_score(ctx, vol),
                Cue::Hit => self.play_hit(ctx, vol),
                Cue::Die => self.play_die(ctx, vol),
            }
        }

        /// Resume audio context (required after user gesture)
        fn resume(&mut self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
            log::info!("Audio volume: {:.2}", self.volume);
        }
    }
}

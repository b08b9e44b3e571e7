use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Milliseconds per typed char, per deleted char, and the pause on a
/// fully typed phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_speed: u32,
    pub delete_speed: u32,
    pub delay_speed: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_speed: 80,
            delete_speed: 50,
            delay_speed: 1500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Position of the cycling-phrase effect: which phrase, how many of its
/// chars are on screen, and how many full passes over the list are behind us.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TypewriterState {
    index: usize,
    shown: usize,
    phase: Phase,
    loops: u32,
}

impl TypewriterState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn text<'a>(&self, words: &'a [String]) -> &'a str {
        let Some(word) = words.get(self.index) else {
            return "";
        };
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// How long to wait before the next `step`. `None` once a finite run
    /// has finished.
    pub fn delay(&self, timing: TypewriterTiming) -> Option<u32> {
        match self.phase {
            Phase::Typing => Some(timing.type_speed),
            Phase::Holding => Some(timing.delay_speed),
            Phase::Deleting => Some(timing.delete_speed),
            Phase::Done => None,
        }
    }

    /// Advances by one char (or one phase change). `loop_count` of `None`
    /// or `Some(0)` cycles forever; `Some(n)` stops with the last phrase of
    /// the n-th pass left on screen.
    pub fn step(self, words: &[String], loop_count: Option<u32>) -> Self {
        if words.is_empty() {
            return self;
        }
        let len = words
            .get(self.index)
            .map(|w| w.chars().count())
            .unwrap_or(0);

        match self.phase {
            Phase::Typing => {
                let shown = (self.shown + 1).min(len);
                if shown < len {
                    return Self { shown, ..self };
                }
                let last_pass = loop_count
                    .filter(|n| *n > 0)
                    .map_or(false, |n| self.index + 1 >= words.len() && self.loops + 1 >= n);
                Self {
                    shown: len,
                    phase: if last_pass { Phase::Done } else { Phase::Holding },
                    ..self
                }
            }
            Phase::Holding => Self {
                phase: Phase::Deleting,
                ..self
            },
            Phase::Deleting => {
                let shown = self.shown.min(len).saturating_sub(1);
                if shown > 0 {
                    return Self { shown, ..self };
                }
                let next = self.index + 1;
                let wrapped = next >= words.len();
                Self {
                    index: if wrapped { 0 } else { next },
                    shown: 0,
                    phase: Phase::Typing,
                    loops: self.loops + u32::from(wrapped),
                }
            }
            Phase::Done => self,
        }
    }
}

fn default_cursor() -> String {
    "|".to_string()
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub words: Vec<String>,
    #[prop_or_default]
    pub timing: TypewriterTiming,
    #[prop_or_default]
    pub loop_count: Option<u32>,
    #[prop_or(true)]
    pub cursor: bool,
    #[prop_or_else(default_cursor)]
    pub cursor_style: String,
    #[prop_or_default]
    pub on_loop_done: Option<Callback<()>>,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let state = use_state(TypewriterState::default);

    {
        let current = *state;
        let state = state.clone();
        let words = props.words.clone();
        let timing = props.timing;
        let loop_count = props.loop_count;
        let on_loop_done = props.on_loop_done.clone();
        use_effect_with_deps(
            move |current: &TypewriterState| {
                let pending = if words.is_empty() {
                    None
                } else {
                    current.delay(timing).map(|delay| {
                        let next = current.step(&words, loop_count);
                        Timeout::new(delay, move || {
                            if next.is_done() {
                                if let Some(on_loop_done) = on_loop_done {
                                    on_loop_done.emit(());
                                }
                            }
                            state.set(next);
                        })
                    })
                };

                // Dropping a pending Timeout cancels it
                move || drop(pending)
            },
            current,
        );
    }

    if props.words.is_empty() {
        return html! {};
    }

    html! {
        <span class="typewriter">
            <span class="typewriter-text">{ state.text(&props.words).to_string() }</span>
            {
                if props.cursor {
                    html! { <span class="typewriter-cursor">{ props.cursor_style.clone() }</span> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .typewriter-cursor {
                    display: inline-block;
                    margin-left: 2px;
                    animation: typewriter-blink 1s step-end infinite;
                }

                @keyframes typewriter-blink {
                    from, to { opacity: 1; }
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<String> {
        ["AI Developer", "Web Developer", "Robot Programmer", "Software Engineer"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    // Every phrase that reaches the fully typed pause, in order.
    fn held_phrases(words: &[String], loop_count: Option<u32>, limit: usize) -> Vec<String> {
        let mut state = TypewriterState::default();
        let mut held = Vec::new();
        for _ in 0..10_000 {
            if held.len() == limit || state.is_done() {
                break;
            }
            state = state.step(words, loop_count);
            if matches!(state.phase(), Phase::Holding | Phase::Done) {
                held.push(state.text(words).to_string());
            }
        }
        held
    }

    #[test]
    fn cycles_back_to_first_phrase() {
        let words = roles();
        let held = held_phrases(&words, None, 9);
        assert_eq!(
            held,
            vec![
                "AI Developer",
                "Web Developer",
                "Robot Programmer",
                "Software Engineer",
                "AI Developer",
                "Web Developer",
                "Robot Programmer",
                "Software Engineer",
                "AI Developer",
            ]
        );
    }

    #[test]
    fn types_one_char_per_step_then_deletes() {
        let words = vec!["abc".to_string()];
        let mut state = TypewriterState::default();
        assert_eq!(state.text(&words), "");

        let mut seen = Vec::new();
        for _ in 0..8 {
            state = state.step(&words, None);
            seen.push(state.text(&words).to_string());
        }
        // a, ab, abc (holding), abc (deleting starts), ab, a, "" with the next pass typing
        assert_eq!(seen, vec!["a", "ab", "abc", "abc", "ab", "a", "", "a"]);
    }

    #[test]
    fn delay_follows_phase() {
        let timing = TypewriterTiming {
            type_speed: 70,
            delete_speed: 50,
            delay_speed: 1400,
        };
        let words = vec!["x".to_string(), "y".to_string()];
        let typing = TypewriterState::default();
        assert_eq!(typing.delay(timing), Some(70));
        let holding = typing.step(&words, None);
        assert_eq!(holding.phase(), Phase::Holding);
        assert_eq!(holding.delay(timing), Some(1400));
        let deleting = holding.step(&words, None);
        assert_eq!(deleting.delay(timing), Some(50));
    }

    #[test]
    fn finite_loop_stops_on_last_phrase() {
        let words = roles();
        let held = held_phrases(&words, Some(1), 100);
        assert_eq!(held.len(), 4);
        assert_eq!(held.last().map(String::as_str), Some("Software Engineer"));

        let mut state = TypewriterState::default();
        while !state.is_done() {
            state = state.step(&words, Some(1));
        }
        assert_eq!(state.delay(TypewriterTiming::default()), None);
        assert_eq!(state.step(&words, Some(1)), state);
        assert_eq!(state.text(&words), "Software Engineer");
    }

    #[test]
    fn zero_loop_count_cycles_forever() {
        let words = roles();
        assert_eq!(held_phrases(&words, Some(0), 12).len(), 12);
    }

    #[test]
    fn never_splits_a_char() {
        let words = vec!["héllo ✓".to_string()];
        let mut state = TypewriterState::default();
        let mut frames = Vec::new();
        for _ in 0..7 {
            state = state.step(&words, None);
            frames.push(state.text(&words).to_string());
        }
        assert_eq!(frames[1], "hé");
        assert_eq!(frames[6], "héllo ✓");
    }

    #[test]
    fn empty_list_stays_put() {
        let state = TypewriterState::default();
        assert_eq!(state.step(&[], None), state);
        assert_eq!(state.text(&[]), "");
    }

    #[test]
    fn empty_phrase_is_skipped_through() {
        let words = vec![String::new(), "b".to_string()];
        let held = held_phrases(&words, None, 3);
        assert_eq!(held, vec!["", "b", ""]);
    }
}

use cricket_core::QuizCue;

/// Shared audio and confetti helpers, installed once per window.
const CUE_RUNTIME: &str = r##"
    const cues = window.__cricketCues || (window.__cricketCues = (() => {
        let ctx = null;
        const audio = () => {
            if (!ctx) {
                const Ctor = window.AudioContext || window.webkitAudioContext;
                if (!Ctor) {
                    return null;
                }
                ctx = new Ctor();
            }
            return ctx;
        };
        const tone = (freqs, step, type) => {
            const ac = audio();
            if (!ac) {
                return;
            }
            freqs.forEach((freq, idx) => {
                const osc = ac.createOscillator();
                const gain = ac.createGain();
                const start = ac.currentTime + idx * step;
                osc.type = type;
                osc.frequency.value = freq;
                gain.gain.setValueAtTime(0.18, start);
                gain.gain.exponentialRampToValueAtTime(0.001, start + step * 1.6);
                osc.connect(gain);
                gain.connect(ac.destination);
                osc.start(start);
                osc.stop(start + step * 1.6);
            });
        };
        const confetti = () => {
            const colors = ["#1b998b", "#f46036", "#e2c044", "#2e294e", "#c5d86d"];
            const layer = document.createElement("div");
            layer.className = "confetti";
            for (let i = 0; i < 80; i++) {
                const piece = document.createElement("span");
                piece.className = "confetti__piece";
                piece.style.left = Math.random() * 100 + "vw";
                piece.style.background = colors[i % colors.length];
                piece.style.animationDelay = Math.random() * 0.6 + "s";
                piece.style.transform = "rotate(" + Math.random() * 360 + "deg)";
                layer.appendChild(piece);
            }
            document.body.appendChild(layer);
            setTimeout(() => layer.remove(), 2600);
        };
        return { tone, confetti };
    })());
"##;

fn cue_call(cue: QuizCue) -> &'static str {
    match cue {
        QuizCue::CorrectTone => "cues.tone([660, 880], 0.09, \"sine\");",
        QuizCue::IncorrectTone => "cues.tone([196, 147], 0.14, \"square\");",
        QuizCue::CelebrationTone => "cues.tone([523, 659, 784, 1047], 0.12, \"triangle\");",
        QuizCue::CelebrationEffect => "cues.confetti();",
    }
}

/// Script that plays `cues` in order, or `None` when there is nothing to play.
pub(super) fn cue_script(cues: &[QuizCue]) -> Option<String> {
    if cues.is_empty() {
        return None;
    }
    let calls: String = cues.iter().map(|cue| cue_call(*cue)).collect::<Vec<_>>().join("\n");
    Some(format!("(function() {{{CUE_RUNTIME}\n{calls}\n}})();"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_cues_means_no_script() {
        assert!(cue_script(&[]).is_none());
    }

    #[test]
    fn celebration_plays_tone_before_confetti() {
        let js = cue_script(&[QuizCue::CorrectTone, QuizCue::CelebrationTone, QuizCue::CelebrationEffect])
            .unwrap();
        let tone = js.find("cues.tone([523").unwrap();
        let confetti = js.find("cues.confetti();").unwrap();
        assert!(js.contains("cues.tone([660, 880]"));
        assert!(tone < confetti);
    }
}

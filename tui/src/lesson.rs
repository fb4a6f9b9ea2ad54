//! Demo Lesson
//!
//! A short lesson in a made-up script: a title card, how to navigate, a
//! hover vocabulary page, a typed answer and a multiple-choice question.
//! The pages loop forever; escape returns to the title.

use scene_core::element::{
    Checker, DiscretePlayer, HoverText, Options, SequentialPlayer, SlowText, TextInput,
    WaitForNext,
};
use scene_core::style::{BLUE, GOLDENROD, PINK, RED};
use scene_core::{Element, ReplaceMap, Stage, Style, TypingSounds};

/// The words the lesson teaches
pub fn dictionary() -> ReplaceMap {
    ReplaceMap::new()
        .with("sh", "a soft hiss, like \"shh\"", Style::fg(GOLDENROD))
        .with("tl", "a clipped \"t\" with the tongue\nheld to one side", Style::fg(GOLDENROD))
        .with("shash", "bear", Style::fg(RED))
        .with("tlish", "fish", Style::fg(RED))
        .with("kori", "river", Style::fg(RED))
        .with("bear", "shash", Style::fg(PINK))
        .with("fish", "tlish", Style::fg(PINK))
        .with("shash kori", "\"river bear\"\nthe name for an otter", Style::fg(BLUE))
}

struct Page {
    stage: Stage,
    sounds: TypingSounds,
    row: i32,
    elements: Vec<Box<dyn Element>>,
}

impl Page {
    fn new(stage: Stage, sounds: &TypingSounds) -> Self {
        Self {
            stage,
            sounds: sounds.clone(),
            row: 0,
            elements: Vec::new(),
        }
    }

    fn say(mut self, text: &str, height: i32) -> Self {
        let rect = self.stage.margin_rect(0, self.row, height);
        self.elements
            .push(Box::new(SlowText::typewriter(text, rect, self.sounds.clone())));
        self.row += height + 1;
        self
    }

    fn hover(mut self, text: &str, height: i32, dict: &ReplaceMap) -> Self {
        let rect = self.stage.margin_rect(0, self.row, height);
        self.elements.push(Box::new(HoverText::new(text, rect, dict)));
        self.row += height + 1;
        self
    }

    fn then(mut self, element: Box<dyn Element>, height: i32) -> Self {
        self.elements.push(element);
        self.row += height + 1;
        self
    }

    fn wait(mut self) -> Self {
        self.elements.push(Box::new(WaitForNext::new()));
        self
    }

    fn next_rect(&self, height: i32) -> scene_core::Rect {
        self.stage.margin_rect(0, self.row, height)
    }

    fn build(self) -> Box<dyn Element> {
        Box::new(SequentialPlayer::new(self.elements))
    }
}

/// Feedback shown after an answer, dismissed with space
fn feedback(stage: Stage, sounds: &TypingSounds, row: i32, text: &str) -> Box<dyn Element> {
    let mut page = Page::new(stage, sounds);
    page.row = row;
    page.say(text, 1).wait().build()
}

/// Build the whole lesson
pub fn build(stage: Stage, sounds: &TypingSounds) -> Box<dyn Element> {
    let dict = dictionary();

    let title = Page::new(stage, sounds)
        .say("codetalk", 1)
        .say("A tiny lesson in reading a made-up script.", 2)
        .wait()
        .build();

    let navigation = Page::new(stage, sounds)
        .say("Press [SPACE] to show text at once, then again to move on.", 2)
        .say("Coloured words have notes. Point at them with the mouse.", 2)
        .say("Press [ESCAPE] at any time to come back to the title.", 2)
        .wait()
        .build();

    let vocabulary = Page::new(stage, sounds)
        .say("Three words to start:", 1)
        .hover("{shash}\t{tlish}\t{kori}", 1, &dict)
        .say("Each begins with a sound English lacks:", 1)
        .hover("{sh}ash and {tl}ish.", 1, &dict)
        .say("Put two together and you get an animal:", 1)
        .hover("{shash kori}", 1, &dict)
        .wait()
        .build();

    let typed = {
        let page = Page::new(stage, sounds).hover("Type the word for {bear}, then press enter:", 1, &dict);
        let input = TextInput::typewriter(page.next_rect(1), sounds.clone());
        let feedback_row = page.row + 2;
        let checker = Checker::new(
            Box::new(input),
            &["shash"],
            feedback(stage, sounds, feedback_row, "Right! Shash is a bear."),
            feedback(stage, sounds, feedback_row, "Not quite. Hover the word and try again."),
        );
        page.then(Box::new(checker), 1).build()
    };

    let choice = {
        let page = Page::new(stage, sounds).hover(
            "Which of these is a {fish}? Use the arrows, then enter.",
            1,
            &dict,
        );
        let options = Options::new(&["shash", "tlish", "kori"], page.next_rect(1));
        let feedback_row = page.row + 6;
        let checker = Checker::new(
            Box::new(options),
            &["tlish"],
            feedback(stage, sounds, feedback_row, "Yes, tlish swim in the kori."),
            feedback(stage, sounds, feedback_row, "That one doesn't swim. Try again."),
        );
        page.then(Box::new(checker), 5).build()
    };

    let ending = Page::new(stage, sounds)
        .say("That's the whole lesson.", 1)
        .say("Press [SPACE] to start over.", 1)
        .wait()
        .build();

    Box::new(DiscretePlayer::new(vec![
        title, navigation, vocabulary, typed, choice, ending,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_core::{Dictionary, Event, MemorySurface, Scheduler, Silence};
    use std::sync::Arc;

    #[test]
    fn test_dictionary_lookups() {
        let dict = dictionary();
        assert_eq!(dict.text("Shash"), "bear");
        assert_eq!(dict.style("tlish"), Style::fg(RED));
        assert_eq!(dict.text("otter"), "");
    }

    #[test]
    fn test_lesson_runs_headless() {
        let stage = Stage::default();
        let sounds = TypingSounds::uniform(Arc::new(Silence));
        let root = build(stage, &sounds);
        let mut sched = Scheduler::new(root, MemorySurface::new(79, 20), stage);
        sched.start().unwrap();

        for _ in 0..20 {
            sched.tick(Vec::new()).unwrap();
        }
        assert_eq!(sched.surface().row_text(2).trim_end(), " codetalk");

        sched.tick(vec![Event::Key(' ')]).unwrap();
        sched.tick(vec![Event::Key(' ')]).unwrap();
        assert!(!sched.root().done());
    }
}

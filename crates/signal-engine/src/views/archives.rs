use crate::api::types::{Outcome, ViewId, CONTROL_NEXT, CONTROL_PREV};
use crate::api::view::{StageContext, View};
use crate::content::script::{Document, Script};
use crate::core::timeline::{CueId, Timeline};
use crate::input::queue::InputEvent;
use crate::puzzles::pager::Pager;
use crate::views::ViewSnapshot;

const CUE_NAV: u32 = 1;
const CUE_LINE: u32 = 2;

const NAV_DELAY_MS: f32 = 3000.0;
const LINE_STEP_MS: f32 = 100.0;

/// The classified archive: five documents, each printing line by line.
/// Advancing past the last one moves on.
pub struct ArchivesView {
    documents: Vec<Document>,
    pager: Pager,
    revealed: usize,
    nav_armed: bool,
    /// Pending line cues for the current document, cancelled on re-page.
    line_cues: Vec<CueId>,
    timeline: Timeline,
}

impl ArchivesView {
    pub fn new(script: &Script) -> Self {
        let documents = script.archive_documents.clone();
        let pager = Pager::new(documents.len());
        Self {
            documents,
            pager,
            revealed: 0,
            nav_armed: false,
            line_cues: Vec::new(),
            timeline: Timeline::new(),
        }
    }

    fn current(&self) -> Option<&Document> {
        self.documents.get(self.pager.index())
    }

    /// Restart the line printout for the current document, cancelling any
    /// cues still pending from the previous one. The nav cue is untouched.
    fn arm_lines(&mut self, ctx: &mut StageContext) {
        for cue in self.line_cues.drain(..) {
            self.timeline.cancel(cue);
        }
        self.revealed = 0;
        let count = self.current().map(|doc| doc.lines.len()).unwrap_or(0);
        self.line_cues =
            self.timeline
                .cue_series(count as u32, LINE_STEP_MS, 0.0, CUE_LINE, ctx.rng);
    }
}

impl View for ArchivesView {
    fn id(&self) -> ViewId {
        ViewId::Archives
    }

    fn enter(&mut self, ctx: &mut StageContext) {
        self.timeline.cue_in(NAV_DELAY_MS, CUE_NAV);
        self.arm_lines(ctx);
    }

    fn tick(&mut self, dt_ms: f32, _ctx: &mut StageContext) {
        for fired in self.timeline.tick(dt_ms) {
            match fired.kind {
                CUE_NAV => self.nav_armed = true,
                CUE_LINE => self.revealed = self.revealed.max(fired.index as usize + 1),
                _ => {}
            }
        }
    }

    fn handle(&mut self, event: &InputEvent, ctx: &mut StageContext) {
        let InputEvent::Press { control } = event else {
            return;
        };
        if !self.nav_armed {
            return;
        }
        match *control {
            CONTROL_NEXT => match self.pager.next() {
                Outcome::Success => ctx.advance(ViewId::Math),
                _ => self.arm_lines(ctx),
            },
            CONTROL_PREV => {
                let before = self.pager.index();
                self.pager.prev();
                if self.pager.index() != before {
                    self.arm_lines(ctx);
                }
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        let (title, date, lines) = match self.current() {
            Some(doc) => (doc.title.clone(), doc.date.clone(), doc.lines.clone()),
            None => (String::new(), String::new(), Vec::new()),
        };
        ViewSnapshot::Archives {
            index: self.pager.index(),
            count: self.pager.count(),
            title,
            date,
            lines,
            revealed: self.revealed,
            nav_armed: self.nav_armed,
        }
    }
}

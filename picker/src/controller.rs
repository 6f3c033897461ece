//! The range picker: selection, navigation and visibility composed behind
//! one owner, plus range-selected notifications for collaborators.

use chrono::NaiveDate;

use crate::calendar::{self, DayCell, YearMonth};
use crate::highlight;
use crate::navigation::{Direction, Navigator};
use crate::range::{DateRange, SelectedRange};
use crate::selection::{SelectionMachine, SelectionPhase};
use crate::visibility::{ActivationHooks, NoHooks, PickerId, Visibility, VisibilityState};

/// One displayed month with classified cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub month: YearMonth,
    pub cells: Vec<DayCell>,
}

impl MonthView {
    fn build(month: YearMonth, range: &DateRange) -> Self {
        let cells = calendar::build_month(month)
            .into_iter()
            .map(|cell| DayCell {
                highlight: highlight::classify(range, cell.date),
                ..cell
            })
            .collect();
        MonthView { month, cells }
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }
}

/// Result of a date activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The activation did not resolve to a selectable date.
    Ignored,
    /// A start point was picked; the range is awaiting its end.
    Started(NaiveDate),
    /// The range is complete and listeners have been notified.
    Completed(SelectedRange),
}

type Listener = Box<dyn FnMut(&SelectedRange)>;

/// Two-month date-range picker.
///
/// All operations run to completion synchronously; the month grids seen
/// through [`RangePicker::months`] are always rebuilt for the latest state.
pub struct RangePicker {
    id: PickerId,
    selection: SelectionMachine,
    navigator: Navigator,
    visibility: VisibilityState,
    committed: SelectedRange,
    grid: Option<[MonthView; 2]>,
    listeners: Vec<Listener>,
    hooks: Box<dyn ActivationHooks>,
}

impl RangePicker {
    /// Picker whose host never reports document activations.
    pub fn new(initial: SelectedRange) -> Self {
        Self::with_hooks(initial, NoHooks)
    }

    /// The initial range is taken as given, even if inverted.
    pub fn with_hooks(initial: SelectedRange, hooks: impl ActivationHooks + 'static) -> Self {
        let id = PickerId::next();
        let mut hooks: Box<dyn ActivationHooks> = Box::new(hooks);
        hooks.subscribe(id);
        tracing::debug!("{id} created with range {initial}");

        RangePicker {
            id,
            selection: SelectionMachine::new(initial.into()),
            navigator: Navigator::new(YearMonth::of(initial.from)),
            visibility: VisibilityState::default(),
            committed: initial,
            grid: None,
            listeners: Vec::new(),
            hooks,
        }
    }

    // ── accessors ───────────────────────────────────────────────────

    pub fn id(&self) -> PickerId {
        self.id
    }

    pub fn current_range(&self) -> DateRange {
        self.selection.range()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn anchor(&self) -> YearMonth {
        self.navigator.anchor()
    }

    pub fn visible_months(&self) -> [YearMonth; 2] {
        self.navigator.visible_months()
    }

    /// Month grids for rendering; `None` until the picker is first opened
    /// or navigated.
    pub fn months(&self) -> Option<&[MonthView; 2]> {
        self.grid.as_ref()
    }

    /// Toggle-target text: the last completed range.
    pub fn label(&self) -> String {
        self.committed.to_string()
    }

    /// Register a collaborator for range-selected notifications.
    pub fn on_range_selected(&mut self, listener: impl FnMut(&SelectedRange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ── visibility ──────────────────────────────────────────────────

    /// Toggle-target activation.
    pub fn activate_toggle(&mut self) -> Visibility {
        let now = self.visibility.toggle();
        if now.is_open() {
            self.ensure_grid();
        }
        now
    }

    pub fn open(&mut self) {
        if self.visibility.open() {
            self.ensure_grid();
        }
    }

    pub fn close(&mut self) {
        self.visibility.close();
    }

    /// Host report of a document activation. `target` is the picker whose
    /// boundary contains the activation target, if any.
    pub fn on_document_activation(&mut self, target: Option<PickerId>) {
        if target != Some(self.id) {
            self.on_outside_activation();
        }
    }

    /// Activation outside this picker's boundary.
    pub fn on_outside_activation(&mut self) {
        if self.visibility.close() {
            tracing::debug!("{} closed by outside activation", self.id);
        }
    }

    // ── selection ───────────────────────────────────────────────────

    /// Apply a date activation.
    ///
    /// On completion listeners run after the range, phase, label and grids
    /// are updated and before the picker closes.
    pub fn select_date(&mut self, date: NaiveDate) -> SelectOutcome {
        let completed = self.selection.click(date);
        if self.grid.is_some() {
            self.regenerate();
        }

        let Some(range) = completed else {
            return SelectOutcome::Started(date);
        };

        self.committed = range;
        for listener in self.listeners.iter_mut() {
            listener(&range);
        }
        self.visibility.close();
        tracing::debug!("{} selected {range}", self.id);
        SelectOutcome::Completed(range)
    }

    /// Apply an activation on a rendered cell, identified by its value.
    ///
    /// Values that do not resolve to a date shown in the open picker leave
    /// all state untouched.
    pub fn select_cell(&mut self, value: &str) -> SelectOutcome {
        if !self.visibility.get().is_open() {
            tracing::debug!("{} ignoring cell activation while closed", self.id);
            return SelectOutcome::Ignored;
        }
        let date = match calendar::resolve_cell(value) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!("{}: {e}", self.id);
                return SelectOutcome::Ignored;
            }
        };
        let shown = self
            .grid
            .iter()
            .flatten()
            .any(|m| m.cell(date).is_some());
        if !shown {
            tracing::debug!("{}: {date} is not a displayed cell", self.id);
            return SelectOutcome::Ignored;
        }
        self.select_date(date)
    }

    // ── navigation ──────────────────────────────────────────────────

    pub fn navigate(&mut self, direction: Direction) {
        self.navigator.step(direction);
        self.regenerate();
    }

    // ── grids ───────────────────────────────────────────────────────

    fn ensure_grid(&mut self) {
        let current = self
            .grid
            .as_ref()
            .is_some_and(|g| g[0].month == self.navigator.anchor());
        if !current {
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        let range = self.selection.range();
        let [left, right] = self.navigator.visible_months();
        self.grid = Some([MonthView::build(left, &range), MonthView::build(right, &range)]);
    }
}

impl Drop for RangePicker {
    fn drop(&mut self) {
        self.hooks.unsubscribe(self.id);
    }
}

impl std::fmt::Debug for RangePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangePicker")
            .field("id", &self.id)
            .field("range", &self.selection.range())
            .field("phase", &self.selection.phase())
            .field("visibility", &self.visibility.get())
            .field("anchor", &self.navigator.anchor())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

use super::slider;
use crate::binding::{SliderBinding, SliderState};
use crate::viewer::{FigureRef, TsoFileRef};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tso_config::quantize;
use tso_config::{MorphRatio, MorphRatios, Subscription};

/// Morph sliders and file list for the active figure.
///
/// Every ratio field has an applier listener that pushes the full ratio set to
/// the figure and then calls `refresh` so the scene is rebuilt. Loading a
/// figure's own ratios writes under each applier's id, so the sliders follow
/// but nothing is applied back.
pub struct FigurePanel {
    visible: Cell<bool>,
    ratios: Rc<MorphRatios>,
    sliders: Vec<(MorphRatio, SliderBinding<SliderState>)>,
    figure: Rc<RefCell<Option<FigureRef>>>,
    files: RefCell<Vec<String>>,
    active_file: RefCell<Option<String>>,
    sub_scripts: RefCell<Vec<String>>,
    appliers: FnvHashMap<MorphRatio, Subscription>,
}

impl FigurePanel {
    pub fn new(control_max: i32, refresh: impl Fn() + 'static) -> Self {
        let ratios = Rc::new(MorphRatios::default());
        let quantizer = quantize::morph(control_max);
        let sliders = MorphRatio::ALL
            .into_iter()
            .map(|which| (which, slider(ratios.field(which), quantizer)))
            .collect();

        let figure: Rc<RefCell<Option<FigureRef>>> = Rc::new(RefCell::new(None));
        let refresh: Rc<dyn Fn()> = Rc::new(refresh);
        let appliers = MorphRatio::ALL
            .into_iter()
            .map(|which| {
                let source = Rc::downgrade(&ratios);
                let target = Rc::clone(&figure);
                let refresh = Rc::clone(&refresh);
                let subscription = ratios.field(which).subscribe(move |_| {
                    let (Some(ratios), Some(figure)) = (source.upgrade(), target.borrow().clone())
                    else {
                        return;
                    };
                    figure.apply_morph_ratios(&ratios.values());
                    refresh();
                });
                (which, subscription)
            })
            .collect();

        Self {
            visible: Cell::new(false),
            ratios,
            sliders,
            figure,
            files: RefCell::new(Vec::new()),
            active_file: RefCell::new(None),
            sub_scripts: RefCell::new(Vec::new()),
            appliers,
        }
    }

    /// Switch the panel to `figure` and show its ratios and files.
    pub fn set_figure(&self, figure: Option<FigureRef>) {
        self.figure.replace(figure.clone());
        let Some(figure) = figure else {
            self.files.borrow_mut().clear();
            log::debug!("[figure] no active figure");
            return;
        };

        let values = figure.morph_ratios();
        for which in MorphRatio::ALL {
            if let Some(applier) = self.appliers.get(&which) {
                self.ratios
                    .field(which)
                    .set_from(values.get(which), applier.id());
            }
        }
        let names: Vec<String> = figure.tso_files().iter().map(|f| f.name()).collect();
        log::debug!("[figure] active figure with {} files", names.len());
        *self.files.borrow_mut() = names;
    }

    pub fn set_tso_file(&self, file: Option<TsoFileRef>) {
        match file {
            Some(file) => {
                *self.active_file.borrow_mut() = Some(file.name());
                *self.sub_scripts.borrow_mut() = file.sub_scripts();
            }
            None => {
                self.active_file.borrow_mut().take();
                self.sub_scripts.borrow_mut().clear();
            }
        }
    }

    pub fn slider(&self, which: MorphRatio) -> Option<&SliderBinding<SliderState>> {
        self.sliders
            .iter()
            .find_map(|(w, s)| (*w == which).then_some(s))
    }

    pub fn ratios(&self) -> &MorphRatios {
        &self.ratios
    }

    pub fn figure(&self) -> Option<FigureRef> {
        self.figure.borrow().clone()
    }

    pub fn files(&self) -> Vec<String> {
        self.files.borrow().clone()
    }

    pub fn active_file(&self) -> Option<String> {
        self.active_file.borrow().clone()
    }

    pub fn sub_scripts(&self) -> Vec<String> {
        self.sub_scripts.borrow().clone()
    }

    pub fn show(&self) {
        self.visible.set(true);
    }

    pub fn hide(&self) {
        self.visible.set(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

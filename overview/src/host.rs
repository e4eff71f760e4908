//! Browser binding: drives [`EngineCore`] from JavaScript map handles.
//!
//! The host page hands over three duck-typed objects: two map adapters (the
//! primary map and the overview map), a projection adapter, and the overlay
//! that positions the box element. Coordinates cross the boundary as
//! `[x, y]` arrays and extents as `[minX, minY, maxX, maxY]`.
//!
//! This module is the only place that touches the DOM. It builds the control
//! elements and applies [`Action::PresentationChanged`] through class toggles;
//! every other action is forwarded to the JS handles.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::collapse::{LabelKind, Presentation};
use crate::config::{OPTION_KEYS, OptionValue, OverviewOptions};
use crate::consts::{
    CLASS_BOX, CLASS_BTN_ABSOLUTE, CLASS_COLLAPSED, CLASS_CONTAINER, CLASS_MAP, CLASS_OL_CONTROL, CLASS_OL_UNSELECTABLE,
};
use crate::engine::{Action, EngineCore};
use crate::geom::{Extent, Point, Size};
use crate::projection::Projection;
use crate::viewport::Viewport;

#[wasm_bindgen]
extern "C" {
    /// Adapter over a host map and its view.
    pub type HostMap;

    #[wasm_bindgen(method, js_name = getExtent)]
    fn js_extent(this: &HostMap) -> JsValue;

    #[wasm_bindgen(method, js_name = getCenter)]
    fn js_center(this: &HostMap) -> JsValue;

    #[wasm_bindgen(method, js_name = getRotation)]
    fn js_rotation(this: &HostMap) -> f64;

    #[wasm_bindgen(method, js_name = getPixelSize)]
    fn js_pixel_size(this: &HostMap) -> JsValue;

    #[wasm_bindgen(method, js_name = coordinateToPixel)]
    fn js_coordinate_to_pixel(this: &HostMap, x: f64, y: f64) -> JsValue;

    #[wasm_bindgen(method, js_name = pixelToCoordinate)]
    fn js_pixel_to_coordinate(this: &HostMap, x: f64, y: f64) -> JsValue;

    #[wasm_bindgen(method, js_name = fitExtent)]
    fn js_fit_extent(this: &HostMap, min_x: f64, min_y: f64, max_x: f64, max_y: f64, width: f64, height: f64);

    #[wasm_bindgen(method, js_name = setCenter)]
    fn js_set_center(this: &HostMap, x: f64, y: f64);

    /// Adapter over the host projection system.
    pub type HostProjection;

    #[wasm_bindgen(method, js_name = getWorldExtent)]
    fn js_world_extent(this: &HostProjection) -> JsValue;

    #[wasm_bindgen(method, js_name = toGuard)]
    fn js_to_guard(this: &HostProjection, x: f64, y: f64) -> JsValue;

    /// Overlay anchoring the box element on the overview map.
    pub type HostOverlay;

    #[wasm_bindgen(method, js_name = setPosition)]
    fn js_set_position(this: &HostOverlay, x: f64, y: f64);
}

/// Read the leading `N` numbers of a JS array; `None` for null, undefined or
/// non-numeric entries.
fn read_numbers<const N: usize>(value: &JsValue) -> Option<[f64; N]> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let array = js_sys::Array::from(value);
    let mut out = [0.0; N];
    for (index, slot) in (0_u32..).zip(out.iter_mut()) {
        *slot = array.get(index).as_f64()?;
    }
    Some(out)
}

fn read_point(value: &JsValue) -> Option<Point> {
    read_numbers::<2>(value).map(|[x, y]| Point::new(x, y))
}

impl Viewport for HostMap {
    fn extent(&self) -> Option<Extent> {
        read_numbers::<4>(&self.js_extent()).map(Extent::from_array)
    }

    fn center(&self) -> Option<Point> {
        read_point(&self.js_center())
    }

    fn rotation(&self) -> f64 {
        self.js_rotation()
    }

    fn pixel_size(&self) -> Option<Size> {
        read_numbers::<2>(&self.js_pixel_size())
            .map(|[w, h]| Size::new(w, h))
            .filter(|s| s.is_drawable())
    }

    fn coordinate_to_pixel(&self, coordinate: Point) -> Option<Point> {
        read_point(&self.js_coordinate_to_pixel(coordinate.x, coordinate.y))
    }

    fn pixel_to_coordinate(&self, pixel: Point) -> Option<Point> {
        read_point(&self.js_pixel_to_coordinate(pixel.x, pixel.y))
    }

    fn fit_extent(&mut self, extent: Extent, size: Size) {
        self.js_fit_extent(extent.min_x, extent.min_y, extent.max_x, extent.max_y, size.width, size.height);
    }

    fn set_center(&mut self, center: Point) {
        self.js_set_center(center.x, center.y);
    }
}

impl Projection for HostProjection {
    fn world_extent(&self) -> Option<Extent> {
        read_numbers::<4>(&self.js_world_extent())
            .map(Extent::from_array)
            .filter(|e| e.min_x <= e.max_x && e.min_y <= e.max_y)
    }

    fn to_guard(&self, coordinate: Point) -> Point {
        read_point(&self.js_to_guard(coordinate.x, coordinate.y)).unwrap_or(Point::new(f64::NAN, f64::NAN))
    }
}

/// Read the recognized option keys off a host object without walking the
/// rest of it.
fn read_options(options: &JsValue) -> Result<OverviewOptions, JsValue> {
    let mut fields = Vec::new();
    if !options.is_undefined() && !options.is_null() {
        for key in OPTION_KEYS {
            let value = js_sys::Reflect::get(options, &JsValue::from_str(key))?;
            if value.is_undefined() {
                continue;
            }
            let value = if let Some(b) = value.as_bool() {
                OptionValue::Bool(b)
            } else if let Some(n) = value.as_f64() {
                OptionValue::Number(n)
            } else if let Some(s) = value.as_string() {
                OptionValue::Text(s)
            } else {
                return Err(JsValue::from_str(&format!("option {key} must be a boolean, number or string")));
            };
            fields.push((key, value));
        }
    }
    OverviewOptions::from_fields(fields).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Control DOM: container, overview map target, toggle button, box element.
struct Dom {
    container: HtmlElement,
    map_target: HtmlElement,
    button: HtmlElement,
    label: HtmlElement,
    marker: HtmlElement,
}

fn create(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document.create_element(tag)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

impl Dom {
    fn build(options: &OverviewOptions) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let container = create(&document, "div")?;
        let map_target = create(&document, "div")?;
        let button = create(&document, "button")?;
        let label = create(&document, "span")?;
        let marker = create(&document, "div")?;

        map_target.set_class_name(CLASS_MAP);
        container.append_child(&map_target)?;

        marker.set_class_name(CLASS_BOX);
        marker.style().set_property("box-sizing", "border-box")?;

        button.set_attribute("type", "button")?;
        button.set_title(&options.tip_label);
        button.append_child(&label)?;
        container.append_child(&button)?;

        container.set_class_name(&[CLASS_CONTAINER, CLASS_OL_CONTROL, CLASS_OL_UNSELECTABLE].join(" "));

        Ok(Self { container, map_target, button, label, marker })
    }

    fn apply(&self, presentation: Presentation, options: &OverviewOptions) -> Result<(), JsValue> {
        self.container.class_list().toggle_with_force(CLASS_COLLAPSED, presentation.collapsed)?;
        self.button.class_list().toggle_with_force(CLASS_BTN_ABSOLUTE, presentation.button_absolute)?;
        let text = match presentation.label {
            LabelKind::Expand => &options.label,
            LabelKind::Collapse => &options.collapse_label,
        };
        self.label.set_text_content(Some(text));
        Ok(())
    }
}

/// The interactive overview control as exposed to JavaScript.
#[wasm_bindgen]
pub struct Overview {
    core: EngineCore<HostMap, HostMap, HostProjection>,
    overlay: HostOverlay,
    options: OverviewOptions,
    dom: Dom,
}

#[wasm_bindgen]
impl Overview {
    /// Build the control DOM and validate options.
    ///
    /// `options` is the host's options object. Only the keys in
    /// [`OPTION_KEYS`] are read, one property at a time. `layers` and `view`
    /// belong to the overview map: the host applies them when it builds the
    /// map behind the `overview` adapter.
    ///
    /// # Errors
    ///
    /// Fails when the options are invalid or the DOM cannot be created.
    #[wasm_bindgen(constructor)]
    pub fn new(
        primary: HostMap,
        overview: HostMap,
        projection: HostProjection,
        overlay: HostOverlay,
        options: JsValue,
    ) -> Result<Overview, JsValue> {
        let options = read_options(&options)?;
        let core =
            EngineCore::new(primary, overview, projection, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let dom = Dom::build(&options)?;
        Ok(Self { core, overlay, options, dom })
    }

    /// Root element to hand to the host control base.
    #[must_use]
    pub fn element(&self) -> HtmlElement {
        self.dom.container.clone()
    }

    /// Target element for the overview map.
    #[must_use]
    #[wasm_bindgen(js_name = mapTarget)]
    pub fn map_target(&self) -> HtmlElement {
        self.dom.map_target.clone()
    }

    /// Element the overlay should position as the box.
    #[must_use]
    #[wasm_bindgen(js_name = boxElement)]
    pub fn box_element(&self) -> HtmlElement {
        self.dom.marker.clone()
    }

    /// Call once the overview map is attached and sized.
    ///
    /// # Errors
    ///
    /// Propagates DOM failures while applying the initial presentation.
    pub fn init(&mut self) -> Result<(), JsValue> {
        let actions = self.core.init();
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Propagates DOM failures.
    #[wasm_bindgen(js_name = resetExtent)]
    pub fn reset_extent(&mut self) -> Result<(), JsValue> {
        let actions = self.core.reset_extent();
        self.apply(&actions)
    }

    /// Call on every primary map render, and once more on the overview map's
    /// first render: until both maps have drawn, the box cannot be placed.
    ///
    /// # Errors
    ///
    /// Propagates DOM failures.
    #[wasm_bindgen(js_name = viewChanged)]
    pub fn view_changed(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_view_changed();
        self.apply(&actions)
    }

    /// Pointer pressed on the box element.
    ///
    /// Returns `true` when a drag started; the host must then listen for
    /// `pointerMove`/`pointerUp` on the window until `pointerUp` returns `true`.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self) -> bool {
        let actions = self.core.begin_drag();
        actions.contains(&Action::CapturePointer)
    }

    /// `x`/`y` are pixels relative to the overview map viewport.
    ///
    /// # Errors
    ///
    /// Propagates DOM failures.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_move(Point::new(x, y));
        self.apply(&actions)
    }

    /// Returns `true` when a drag ended and window listeners must be removed.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.core.on_pointer_up().contains(&Action::ReleasePointer)
    }

    /// Toggle button activated (click, or touch-end forwarded as click).
    ///
    /// # Errors
    ///
    /// Propagates DOM failures.
    pub fn toggle(&mut self) -> Result<(), JsValue> {
        let actions = self.core.toggle_collapse();
        self.apply(&actions)
    }

    /// `transitionend` on the overview map element.
    ///
    /// # Errors
    ///
    /// Propagates DOM failures.
    #[wasm_bindgen(js_name = transitionEnd)]
    pub fn transition_end(&mut self, property: &str) -> Result<(), JsValue> {
        let actions = self.core.on_transition_end(property);
        self.apply(&actions)
    }
}

impl Overview {
    fn apply(&self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::MarkerMoved(p) => self.overlay.js_set_position(p.x, p.y),
                Action::PresentationChanged(presentation) => self.dom.apply(*presentation, &self.options)?,
                Action::PrimaryCentered(_)
                | Action::OverviewReset
                | Action::OverviewRecentered
                | Action::CapturePointer
                | Action::ReleasePointer => {}
            }
        }
        Ok(())
    }
}

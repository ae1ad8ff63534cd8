//! Graphics state tracking, reduced to what the rewrite policies read:
//! the current fill (non-stroking) color.
//!
//! The stroking color and the q/Q stack are tracked alongside it so that
//! state observed after a restore is correct. A color the stream selects
//! outside the three device models (named spaces, patterns) is recorded
//! as unknown and can never match a configured target.

use crate::model::color::Color;
use lopdf::Object;
use lopdf::content::Operation;

/// Accumulated color state of a content stream.
///
/// `apply` must be called for every operation in document order before a
/// policy inspects the current fill color.
#[derive(Debug, Clone)]
pub struct GraphicsState {
    fill: Option<Color>,
    stroke: Option<Color>,
    stack: Vec<(Option<Color>, Option<Color>)>,
}

impl GraphicsState {
    /// Initial state: DeviceGray black for both fill and stroke.
    pub fn new() -> Self {
        Self {
            fill: Some(Color::Gray(0.0)),
            stroke: Some(Color::Gray(0.0)),
            stack: Vec::new(),
        }
    }

    /// Current fill color, `None` when it is not a plain device color.
    pub fn fill_color(&self) -> Option<&Color> {
        self.fill.as_ref()
    }

    /// Current stroking color, `None` when it is not a plain device color.
    pub fn stroke_color(&self) -> Option<&Color> {
        self.stroke.as_ref()
    }

    /// Apply one operation's effect on the color state.
    ///
    /// Operations without a color effect are ignored.
    pub fn apply(&mut self, operation: &Operation) {
        let operands = &operation.operands;
        match operation.operator.as_str() {
            "q" => self.stack.push((self.fill, self.stroke)),
            "Q" => {
                if let Some((fill, stroke)) = self.stack.pop() {
                    self.fill = fill;
                    self.stroke = stroke;
                }
            }
            "g" => self.fill = gray_from_operands(operands),
            "G" => self.stroke = gray_from_operands(operands),
            "rg" => self.fill = rgb_from_operands(operands),
            "RG" => self.stroke = rgb_from_operands(operands),
            "k" => self.fill = cmyk_from_operands(operands),
            "K" => self.stroke = cmyk_from_operands(operands),
            "sc" | "scn" => self.fill = color_from_operands(operands),
            "SC" | "SCN" => self.stroke = color_from_operands(operands),
            "cs" => self.fill = initial_color_for_space(operands),
            "CS" => self.stroke = initial_color_for_space(operands),
            _ => {}
        }
    }
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self::new()
    }
}

fn operand_number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(n) => Some(*n as f64),
        Object::Real(n) => Some(*n as f64),
        _ => None,
    }
}

fn gray_from_operands(operands: &[Object]) -> Option<Color> {
    match operands {
        [g] => Some(Color::Gray(operand_number(g)?)),
        _ => None,
    }
}

fn rgb_from_operands(operands: &[Object]) -> Option<Color> {
    match operands {
        [r, g, b] => Some(Color::Rgb(
            operand_number(r)?,
            operand_number(g)?,
            operand_number(b)?,
        )),
        _ => None,
    }
}

fn cmyk_from_operands(operands: &[Object]) -> Option<Color> {
    match operands {
        [c, m, y, k] => Some(Color::Cmyk(
            operand_number(c)?,
            operand_number(m)?,
            operand_number(y)?,
            operand_number(k)?,
        )),
        _ => None,
    }
}

/// Classify a `sc`/`scn` operand list by its numeric component count.
///
/// A trailing name operand means a pattern is being selected, which is
/// outside the device models.
fn color_from_operands(operands: &[Object]) -> Option<Color> {
    if operands.iter().any(|o| matches!(o, Object::Name(_))) {
        return None;
    }
    let values: Vec<f64> = operands.iter().filter_map(operand_number).collect();
    match values.as_slice() {
        [g] => Some(Color::Gray(*g)),
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        [c, m, y, k] => Some(Color::Cmyk(*c, *m, *y, *k)),
        _ => None,
    }
}

/// Initial color after a `cs`/`CS` color-space selection.
///
/// Device spaces reset to their black; anything selected by resource name
/// is unknown here.
fn initial_color_for_space(operands: &[Object]) -> Option<Color> {
    match operands {
        [Object::Name(name)] => match name.as_slice() {
            b"DeviceGray" => Some(Color::Gray(0.0)),
            b"DeviceRGB" => Some(Color::Rgb(0.0, 0.0, 0.0)),
            b"DeviceCMYK" => Some(Color::Cmyk(0.0, 0.0, 0.0, 1.0)),
            _ => None,
        },
        _ => None,
    }
}

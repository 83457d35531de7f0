//! Signs and buttons.

use super::BlockContext;
use crate::painter::{Painter, Xz};

/// Signpost: a thin post topped by a board turned in 22.5 degree steps.
/// Opposite facings share geometry.
pub(super) fn signpost(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const POST_RADIUS: f32 = 0.05;
    const BOARD_HEIGHT: f32 = 0.6;
    const BOARD_RADIUS: f32 = 0.5;
    /// Half the board thickness, as an angle at the board's edge.
    const SPACING: f32 = 3.0;

    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let r = POST_RADIUS;
    painter.vertical(t, [x - r, z - r], [x + r, z - r], y - 0.5, 0.5);
    painter.vertical(t, [x - r, z + r], [x + r, z + r], y - 0.5, 0.5);
    painter.vertical(t, [x + r, z - r], [x + r, z + r], y - 0.5, 0.5);
    painter.vertical(t, [x - r, z + r], [x - r, z - r], y - 0.5, 0.5);
    painter.horizontal(t, [x - r, z - r], [x + r, z + r], y);

    let angle = f32::from((ctx.meta & 0xF) % 8) * 22.5;
    let rim = |degrees: f32| -> Xz {
        let (sin, cos) = degrees.to_radians().sin_cos();
        [x + BOARD_RADIUS * cos, z + BOARD_RADIUS * sin]
    };
    let near_a = rim(angle - SPACING);
    let near_b = rim(angle + SPACING);
    let far_a = rim(angle + SPACING + 180.0);
    let far_b = rim(angle - SPACING + 180.0);

    painter.vertical(t, near_a, far_a, y, BOARD_HEIGHT);
    painter.vertical(t, near_b, far_b, y, BOARD_HEIGHT);
    painter.vertical(t, near_a, near_b, y, BOARD_HEIGHT);
    painter.vertical(t, far_a, far_b, y, BOARD_HEIGHT);
    for level in [y, y + BOARD_HEIGHT] {
        painter.horizontal_askew(t, [near_a, near_b, far_a, far_b], level);
    }
}

/// Sign hung on the wall named by its data value.
pub(super) fn wall_sign(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const HALF_LENGTH: f32 = 0.4;
    const INSET: f32 = 0.45;
    const DEPTH: f32 = 0.05;

    let (x, z) = (ctx.x, ctx.z);
    let (face, back) = match ctx.meta {
        2 => ([[x - HALF_LENGTH, z + INSET], [x + HALF_LENGTH, z + INSET]], [0.0, DEPTH]),
        3 => ([[x - HALF_LENGTH, z - INSET], [x + HALF_LENGTH, z - INSET]], [0.0, -DEPTH]),
        4 => ([[x + INSET, z - HALF_LENGTH], [x + INSET, z + HALF_LENGTH]], [DEPTH, 0.0]),
        _ => ([[x - INSET, z - HALF_LENGTH], [x - INSET, z + HALF_LENGTH]], [-DEPTH, 0.0]),
    };
    plaque(painter, ctx.texture, face, back, ctx.y - 0.2, 0.5);
}

/// Button on the wall named by its data value.
pub(super) fn button(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const R: f32 = 0.1;

    let (x, z) = (ctx.x, ctx.z);
    let (face, back) = match ctx.meta {
        1 => ([[x - 0.5 + R, z - R], [x - 0.5 + R, z + R]], [-R, 0.0]),
        2 => ([[x + 0.5 - R, z - R], [x + 0.5 - R, z + R]], [R, 0.0]),
        3 => ([[x - R, z - 0.5 + R], [x + R, z - 0.5 + R]], [0.0, -R]),
        _ => ([[x - R, z + 0.5 - R], [x + R, z + 0.5 - R]], [0.0, R]),
    };
    plaque(painter, ctx.texture, face, back, ctx.y - R, 2.0 * R);
}

/// Thin box whose front face runs between `face[0]` and `face[1]` and whose
/// back sits `back` further toward the wall. Only the back stays open.
fn plaque(painter: &mut Painter<'_>, t: i32, face: [Xz; 2], back: Xz, bottom: f32, height: f32) {
    let [a, b] = face;
    let behind = |[px, pz]: Xz| -> Xz { [px + back[0], pz + back[1]] };
    painter.vertical(t, a, b, bottom, height);
    painter.vertical(t, a, behind(a), bottom, height);
    painter.vertical(t, b, behind(b), bottom, height);
    painter.horizontal(t, a, behind(b), bottom);
    painter.horizontal(t, a, behind(b), bottom + height);
}

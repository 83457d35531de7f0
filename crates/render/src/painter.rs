//! Textured quad primitives shared by every shape generator.
//!
//! All primitives emit triangle strips through a [`Painter`]. A painter may
//! carry an explicit transform; rotated shapes derive a child painter with
//! [`Painter::transformed`] and draw in block-local coordinates.

use glam::{Mat4, Vec3};

use crate::atlas::{tile_origin, AtlasRegion, PixelRect, TEX16, TEX32};
use crate::mesh::{MeshBuilder, MeshVertex};

/// Horizontal point as `[x, z]`.
pub(crate) type Xz = [f32; 2];
/// Point in space as `[x, y, z]`.
pub(crate) type Xyz = [f32; 3];

pub(crate) struct Painter<'m> {
    mesh: &'m mut MeshBuilder,
    transform: Option<Mat4>,
}

impl<'m> Painter<'m> {
    pub(crate) fn new(mesh: &'m mut MeshBuilder) -> Self {
        Self {
            mesh,
            transform: None,
        }
    }

    /// A painter that applies `transform` (after any transform already held)
    /// to every vertex it emits.
    pub(crate) fn transformed(&mut self, transform: Mat4) -> Painter<'_> {
        Painter {
            transform: Some(match self.transform {
                Some(outer) => outer * transform,
                None => transform,
            }),
            mesh: &mut *self.mesh,
        }
    }

    /// Emit a raw strip of `(uv, position)` pairs.
    pub(crate) fn strip<const N: usize>(&mut self, vertices: [([f32; 2], Xyz); N]) {
        let transform = self.transform;
        let strip = vertices.map(|(uv, position)| MeshVertex {
            position: match transform {
                Some(matrix) => matrix.transform_point3(Vec3::from(position)).to_array(),
                None => position,
            },
            uv,
        });
        self.mesh.push_strip(&strip);
    }

    /// Emit a quad given in GL quad order (corners around the perimeter).
    pub(crate) fn quad(&mut self, corners: [([f32; 2], Xyz); 4]) {
        let [a, b, c, d] = corners;
        self.strip([a, b, d, c]);
    }

    /// Face perpendicular to X on the block's -X side, centred on `(x, y, z)`.
    pub(crate) fn north_south(&mut self, tile: i32, x: f32, y: f32, z: f32) {
        self.north_south_scaled(tile, x, y, z, 0.5, 0.5);
    }

    /// Face perpendicular to X whose top sits `top` above `y` and whose other
    /// edges sit `scale` away from the centre.
    pub(crate) fn north_south_scaled(&mut self, tile: i32, x: f32, y: f32, z: f32, top: f32, scale: f32) {
        let [u, v] = tile_origin(tile);
        self.strip([
            ([u, v], [x - scale, y + top, z + scale]),
            ([u + TEX16, v], [x - scale, y + top, z - scale]),
            ([u, v + TEX32], [x - scale, y - scale, z + scale]),
            ([u + TEX16, v + TEX32], [x - scale, y - scale, z - scale]),
        ]);
    }

    /// Face perpendicular to Z on the block's -Z side.
    pub(crate) fn west_east(&mut self, tile: i32, x: f32, y: f32, z: f32) {
        self.west_east_scaled(tile, x, y, z, 0.5, 0.5);
    }

    pub(crate) fn west_east_scaled(&mut self, tile: i32, x: f32, y: f32, z: f32, top: f32, scale: f32) {
        let [u, v] = tile_origin(tile);
        self.strip([
            ([u, v], [x - scale, y + top, z - scale]),
            ([u + TEX16, v], [x + scale, y + top, z - scale]),
            ([u, v + TEX32], [x - scale, y - scale, z - scale]),
            ([u + TEX16, v + TEX32], [x + scale, y - scale, z - scale]),
        ]);
    }

    /// Horizontal face at the bottom of the block centred on `(x, y, z)`.
    pub(crate) fn top_down(&mut self, tile: i32, x: f32, y: f32, z: f32) {
        self.top_down_scaled(tile, x, y, z, 0.5);
    }

    pub(crate) fn top_down_scaled(&mut self, tile: i32, x: f32, y: f32, z: f32, scale: f32) {
        let [u, v] = tile_origin(tile);
        let y = y - scale;
        self.strip([
            ([u, v], [x - scale, y, z + scale]),
            ([u + TEX16, v], [x - scale, y, z - scale]),
            ([u, v + TEX32], [x + scale, y, z + scale]),
            ([u + TEX16, v + TEX32], [x + scale, y, z - scale]),
        ]);
    }

    /// Floor face with its texture turned clockwise `turns` quarter turns.
    pub(crate) fn top_down_rotated(&mut self, tile: i32, x: f32, y: f32, z: f32, turns: u8) {
        let [u, v] = tile_origin(tile);
        let (u1, v1) = (u + TEX16, v + TEX32);
        let uvs = match turns {
            0 => [[u, v], [u1, v], [u, v1], [u1, v1]],
            1 => [[u1, v], [u1, v1], [u, v], [u, v1]],
            2 => [[u1, v1], [u, v1], [u1, v], [u, v]],
            _ => [[u, v1], [u, v], [u1, v1], [u1, v]],
        };
        let y = y - 0.5;
        self.strip([
            (uvs[0], [x - 0.5, y, z + 0.5]),
            (uvs[1], [x - 0.5, y, z - 0.5]),
            (uvs[2], [x + 0.5, y, z + 0.5]),
            (uvs[3], [x + 0.5, y, z - 0.5]),
        ]);
    }

    /// Vertical rectangle from `from` to `to`, spanning `y..y + height`.
    pub(crate) fn vertical(&mut self, tile: i32, from: Xz, to: Xz, y: f32, height: f32) {
        self.vertical_rect(tile, from, to, y, height, PixelRect::FULL);
    }

    pub(crate) fn vertical_rect(
        &mut self,
        tile: i32,
        from: Xz,
        to: Xz,
        y: f32,
        height: f32,
        rect: PixelRect,
    ) {
        let r = AtlasRegion::pixels(tile, rect);
        let [x1, z1] = from;
        let [x2, z2] = to;
        self.strip([
            ([r.u, r.v], [x1, y + height, z1]),
            ([r.u + r.du, r.v], [x2, y + height, z2]),
            ([r.u, r.v + r.dv], [x1, y, z1]),
            ([r.u + r.du, r.v + r.dv], [x2, y, z2]),
        ]);
    }

    /// Axis-aligned horizontal rectangle with corners `from` and `to`.
    pub(crate) fn horizontal(&mut self, tile: i32, from: Xz, to: Xz, y: f32) {
        self.horizontal_rect(tile, from, to, y, PixelRect::FULL, false);
    }

    /// Horizontal rectangle using part of the sprite; `flip` swaps the texture axes.
    pub(crate) fn horizontal_rect(
        &mut self,
        tile: i32,
        from: Xz,
        to: Xz,
        y: f32,
        rect: PixelRect,
        flip: bool,
    ) {
        let r = AtlasRegion::pixels(tile, rect);
        let [x1, z1] = from;
        let [x2, z2] = to;
        let uvs = [
            [r.u, r.v],
            [r.u + r.du, r.v],
            [r.u, r.v + r.dv],
            [r.u + r.du, r.v + r.dv],
        ];
        let corners = if flip {
            [[x1, y, z2], [x2, y, z2], [x1, y, z1], [x2, y, z1]]
        } else {
            [[x1, y, z1], [x1, y, z2], [x2, y, z1], [x2, y, z2]]
        };
        self.strip([
            (uvs[0], corners[0]),
            (uvs[1], corners[1]),
            (uvs[2], corners[2]),
            (uvs[3], corners[3]),
        ]);
    }

    /// Horizontal quad through four arbitrary points, in strip order.
    pub(crate) fn horizontal_askew(&mut self, tile: i32, corners: [Xz; 4], y: f32) {
        self.arbitrary_rect(tile, corners.map(|[x, z]| [x, y, z]));
    }

    /// Full-tile quad through four arbitrary points, in strip order.
    pub(crate) fn arbitrary_rect(&mut self, tile: i32, corners: [Xyz; 4]) {
        let [u, v] = tile_origin(tile);
        self.strip([
            ([u, v], corners[0]),
            ([u + TEX16, v], corners[1]),
            ([u, v + TEX32], corners[2]),
            ([u + TEX16, v + TEX32], corners[3]),
        ]);
    }

    /// Vertical quad between the upper corner `from` and the lower corner `to`.
    pub(crate) fn region_vertical(&mut self, r: AtlasRegion, from: Xyz, to: Xyz) {
        let [x1, y1, z1] = from;
        let [x2, y2, z2] = to;
        self.strip([
            ([r.u, r.v], [x1, y1, z1]),
            ([r.u + r.du, r.v], [x2, y1, z2]),
            ([r.u, r.v + r.dv], [x1, y2, z1]),
            ([r.u + r.du, r.v + r.dv], [x2, y2, z2]),
        ]);
    }

    /// Like [`Painter::region_vertical`] with the texture turned a quarter.
    pub(crate) fn region_vertical_rotated(&mut self, r: AtlasRegion, from: Xyz, to: Xyz) {
        let [x1, y1, z1] = from;
        let [x2, y2, z2] = to;
        self.strip([
            ([r.u + r.du, r.v], [x1, y1, z1]),
            ([r.u + r.du, r.v + r.dv], [x2, y1, z2]),
            ([r.u, r.v], [x1, y2, z1]),
            ([r.u, r.v + r.dv], [x2, y2, z2]),
        ]);
    }

    pub(crate) fn region_horizontal(&mut self, r: AtlasRegion, from: Xz, to: Xz, y: f32) {
        let [x1, z1] = from;
        let [x2, z2] = to;
        self.strip([
            ([r.u, r.v], [x1, y, z1]),
            ([r.u + r.du, r.v], [x1, y, z2]),
            ([r.u, r.v + r.dv], [x2, y, z1]),
            ([r.u + r.du, r.v + r.dv], [x2, y, z2]),
        ]);
    }

    pub(crate) fn region_horizontal_rotated(&mut self, r: AtlasRegion, from: Xz, to: Xz, y: f32) {
        let [x1, z1] = from;
        let [x2, z2] = to;
        self.strip([
            ([r.u + r.du, r.v], [x1, y, z1]),
            ([r.u + r.du, r.v + r.dv], [x1, y, z2]),
            ([r.u, r.v], [x2, y, z1]),
            ([r.u, r.v + r.dv], [x2, y, z2]),
        ]);
    }
}

/// Translation followed by a rotation of `degrees` about `axis`.
pub(crate) fn pivot(origin: Xyz, degrees: f32, axis: Vec3) -> Mat4 {
    Mat4::from_translation(Vec3::from(origin))
        * Mat4::from_axis_angle(axis.normalize(), degrees.to_radians())
}

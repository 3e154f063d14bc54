//! Line-list generation for polygon outlines

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{DrawKind, GameState, Polygon};

fn line(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
}

/// Closed outline of a polygon as line-list pairs
pub fn polygon_outline(polygon: &Polygon, color: [f32; 4]) -> Vec<Vertex> {
    let points = polygon.vertices();
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        line(&mut vertices, a, b, color);
    }
    vertices
}

fn color_for(kind: DrawKind) -> [f32; 4] {
    match kind {
        DrawKind::Ship => colors::SHIP,
        DrawKind::Thruster => colors::THRUSTER,
        DrawKind::Bullet => colors::BULLET,
        DrawKind::Asteroid => colors::ASTEROID,
    }
}

/// Every outline for the current frame, plus the ship's heading line
pub fn frame_outlines(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (kind, polygon) in state.drawables() {
        vertices.extend(polygon_outline(polygon, color_for(kind)));
    }
    // Center-to-nose line so the triangle's facing is readable
    line(
        &mut vertices,
        state.player.pos(),
        state.player.nose(),
        colors::SHIP,
    );
    vertices
}

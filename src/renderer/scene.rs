//! Scene drawing
//!
//! A pure function of game state: nothing here mutates the simulation.

use glam::Vec2;

use super::RenderSurface;
use super::vertex::colors;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, GROUND_HEIGHT, GROUND_TILE};
use crate::sim::state::CLOUD_PUFFS;
use crate::sim::{Bird, Cloud, Particle, Pipe, Session, Sky};
use crate::theme::Theme;

/// Height of the lip drawn at the gap end of each pipe
pub const PIPE_CAP_HEIGHT: f32 = 20.0;
/// How far a pipe cap sticks out on each side
pub const PIPE_CAP_OVERHANG: f32 = 5.0;

/// Everything the renderer reads for one frame
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub session: &'a Session,
    pub sky: &'a Sky,
    pub theme: &'a Theme,
    pub show_particles: bool,
    /// Particle life drawn at full opacity
    pub particle_reference_life: f32,
}

/// Draw one full frame, back to front
pub fn draw<S: RenderSurface + ?Sized>(surface: &mut S, view: &SceneView<'_>) {
    let theme = view.theme;

    surface.fill_rect_gradient(
        Vec2::ZERO,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        theme.sky[0],
        theme.sky[1],
    );

    for cloud in &view.sky.clouds {
        draw_cloud(surface, cloud);
    }

    for pipe in &view.session.pipes {
        draw_pipe(surface, pipe, view.session.gap, theme);
    }

    draw_ground(surface, view.session.ground_offset, theme);

    if view.show_particles {
        for particle in &view.session.particles {
            draw_particle(surface, particle, view.particle_reference_life);
        }
        surface.set_global_alpha(1.0);
    }

    draw_bird(surface, &view.session.bird, theme);
}

fn draw_cloud<S: RenderSurface + ?Sized>(surface: &mut S, cloud: &Cloud) {
    let height = cloud.width * 0.6;
    let segment_width = cloud.width / CLOUD_PUFFS as f32;

    for (i, scale) in cloud.puffs.iter().enumerate() {
        // Odd puffs sit slightly higher for a lumpy outline
        let lift = if i % 2 == 0 { 0.0 } else { -5.0 };
        let center = Vec2::new(cloud.pos.x + i as f32 * segment_width, cloud.pos.y + lift);
        surface.fill_circle(center, height * scale, colors::CLOUD);
    }
}

fn draw_pipe<S: RenderSurface + ?Sized>(surface: &mut S, pipe: &Pipe, gap: f32, theme: &Theme) {
    let cap_width = pipe.width + PIPE_CAP_OVERHANG * 2.0;

    // Top pipe and its cap
    surface.fill_rect(
        Vec2::new(pipe.x, 0.0),
        Vec2::new(pipe.width, pipe.gap_top),
        theme.pipe,
    );
    surface.fill_rect(
        Vec2::new(pipe.x - PIPE_CAP_OVERHANG, pipe.gap_top - PIPE_CAP_HEIGHT),
        Vec2::new(cap_width, PIPE_CAP_HEIGHT),
        theme.pipe,
    );

    // Bottom pipe and its cap
    let bottom_y = pipe.gap_bottom(gap);
    surface.fill_rect(
        Vec2::new(pipe.x, bottom_y),
        Vec2::new(pipe.width, FIELD_HEIGHT - bottom_y - GROUND_HEIGHT),
        theme.pipe,
    );
    surface.fill_rect(
        Vec2::new(pipe.x - PIPE_CAP_OVERHANG, bottom_y),
        Vec2::new(cap_width, PIPE_CAP_HEIGHT),
        theme.pipe,
    );
}

fn draw_ground<S: RenderSurface + ?Sized>(surface: &mut S, offset: f32, theme: &Theme) {
    let top = FIELD_HEIGHT - GROUND_HEIGHT;
    surface.fill_rect(
        Vec2::new(0.0, top),
        Vec2::new(FIELD_WIDTH, GROUND_HEIGHT),
        theme.ground,
    );

    // Dashes scroll with the offset to sell the motion
    let mut x = offset;
    while x < FIELD_WIDTH {
        surface.fill_rect(Vec2::new(x, top), Vec2::new(10.0, 5.0), colors::GROUND_DETAIL);
        x += GROUND_TILE;
    }
}

fn draw_particle<S: RenderSurface + ?Sized>(surface: &mut S, particle: &Particle, reference: f32) {
    surface.set_global_alpha(particle.opacity(reference));
    surface.fill_rect(particle.pos, Vec2::splat(particle.size), particle.color);
}

fn draw_bird<S: RenderSurface + ?Sized>(surface: &mut S, bird: &Bird, theme: &Theme) {
    let r = bird.radius;

    surface.save();
    surface.translate(bird.pos);
    surface.rotate(bird.rotation_deg().to_radians());

    surface.fill_circle(Vec2::ZERO, r, theme.bird);
    surface.fill_ellipse(
        Vec2::new(-10.0, 0.0),
        Vec2::new(10.0, 5.0),
        bird.wing_angle,
        colors::WING,
    );
    surface.fill_circle(Vec2::new(5.0, -5.0), 3.0, colors::EYE);
    surface.fill_polygon(
        &[
            Vec2::new(r, 0.0),
            Vec2::new(r + 12.0, -5.0),
            Vec2::new(r + 12.0, 5.0),
        ],
        colors::BEAK,
    );

    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexSurface;
    use crate::theme::ThemeName;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn view_parts() -> (Session, Sky) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        (Session::new(&tuning), Sky::new(&tuning, &mut rng))
    }

    #[test]
    fn test_draw_leaves_state_untouched() {
        let (mut session, sky) = view_parts();
        session.pipes.push(Pipe {
            x: 200.0,
            width: 70.0,
            gap_top: 150.0,
            speed: 3.0,
            passed: false,
        });
        let before = session.clone();

        let mut surface = VertexSurface::new();
        let view = SceneView {
            session: &session,
            sky: &sky,
            theme: Theme::get(ThemeName::Nature),
            show_particles: true,
            particle_reference_life: 100.0,
        };
        draw(&mut surface, &view);

        assert_eq!(session.pipes, before.pipes);
        assert_eq!(session.bird, before.bird);
        assert!(!surface.vertices().is_empty());
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_sky_is_first_and_uses_theme() {
        let (session, sky) = view_parts();
        let theme = Theme::get(ThemeName::Sunset);
        let mut surface = VertexSurface::new();
        draw(
            &mut surface,
            &SceneView {
                session: &session,
                sky: &sky,
                theme,
                show_particles: false,
                particle_reference_life: 100.0,
            },
        );
        assert_eq!(surface.vertices()[0].color, theme.sky[0]);
        assert_eq!(surface.vertices()[2].color, theme.sky[1]);
    }
}

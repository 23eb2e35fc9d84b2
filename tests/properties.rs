use drape::{ClothConfig, ClothMesh, Link, LinkKind, LinkParams, NoOpStepObserver, Particle, Vec2};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -500.0f64..500.0
}

fn vec2() -> impl Strategy<Value = Vec2<f64>> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn integrate_clears_force_and_caps_speed(
        pos in vec2(),
        prev in vec2(),
        force in vec2(),
        damping in 0.0f64..=1.0,
        max_velocity in 0.1f64..50.0,
    ) {
        let mut p = Particle::new(pos, 1.0);
        p.prev_pos = prev;
        p.apply_force(force);
        p.integrate(0.15, damping, max_velocity);

        prop_assert_eq!(p.force, Vec2::zero());
        prop_assert!(p.velocity_raw().length() <= max_velocity * (1.0 + 1e-9));
    }

    #[test]
    fn fixed_particles_ignore_everything(pos in vec2(), force in vec2(), target in vec2()) {
        let mut p = Particle::fixed(pos, 1.0);
        p.apply_force(force);
        p.integrate(0.15, 0.99, 10.0);
        prop_assert!(!p.move_to(target));
        prop_assert_eq!(p.pos, pos);
        prop_assert_eq!(p.prev_pos, pos);
    }

    #[test]
    fn links_break_only_past_max_stretch(rest in 1.0f64..50.0, stretch in 0.0f64..200.0) {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0, 0.0), 1.0),
            Particle::new(Vec2::new(rest, 0.0), 1.0),
        ];
        let mut link = Link::new(0, 1, &particles, LinkKind::Structural, LinkParams::new(0.25, 8.0));
        particles[1].pos.x = stretch;

        let broke = link.apply(&mut particles);
        prop_assert_eq!(broke, stretch > rest * 8.0);
        if broke {
            prop_assert_eq!(particles[0].force, Vec2::zero());
            prop_assert_eq!(particles[1].force, Vec2::zero());
            // Once broken, a link never pushes again.
            particles[1].pos.x = rest;
            prop_assert!(link.apply(&mut particles));
            prop_assert_eq!(particles[1].force, Vec2::zero());
        }
    }

    #[test]
    fn pins_hold_and_links_never_return(
        cols in 2usize..12,
        rows in 2usize..10,
        seed in any::<u64>(),
        frames in 1usize..40,
    ) {
        let config = ClothConfig::new().with_seed(seed);
        let mut cloth: ClothMesh<f64> = ClothMesh::new(cols, rows, 10.0, config).unwrap();
        let pins: Vec<_> = cloth
            .particles()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.fixed)
            .map(|(i, p)| (i, p.pos))
            .collect();

        let mut links = cloth.link_count();
        for _ in 0..frames {
            cloth.step(&mut NoOpStepObserver);
            prop_assert!(cloth.link_count() <= links);
            links = cloth.link_count();
        }
        for (i, pos) in pins {
            prop_assert_eq!(cloth.particles()[i].pos, pos);
        }
        prop_assert!(cloth.links().iter().all(|l| !l.is_broken()));
    }
}

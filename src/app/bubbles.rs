use hsl::HSL;
use rand::Rng;

use crate::basic::Point;
use crate::color::to_color::ToColor;
use crate::rendering::surface::Surface;

struct Bubble {
    pos: Point,
    radius: f32,
    /// Pixels per second, upwards
    speed: f32,
    hue: f64,
}

/// Slowly rising circles behind the menus
pub struct Bubbles {
    bubbles: Vec<Bubble>,
    area: Point,
}

fn random_bubble(area: Point, rng: &mut impl Rng, y: f32) -> Bubble {
    Bubble {
        pos: Point { x: rng.gen_range(0. ..area.x.max(1.)), y },
        radius: rng.gen_range(4. ..18.),
        speed: rng.gen_range(15. ..60.),
        hue: rng.gen_range(0. ..360.),
    }
}

impl Bubbles {
    pub fn new(count: usize, area: Point, rng: &mut impl Rng) -> Self {
        let bubbles = (0..count)
            .map(|_| {
                let y = rng.gen_range(0. ..area.y.max(1.));
                random_bubble(area, rng, y)
            })
            .collect();
        Self { bubbles, area }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// Bubbles that rise past the top start again below the bottom edge
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for bubble in &mut self.bubbles {
            bubble.pos.y -= bubble.speed * dt;
            if bubble.pos.y + bubble.radius < 0. {
                *bubble = random_bubble(self.area, rng, self.area.y + 20.);
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for bubble in &self.bubbles {
            let color = HSL { h: bubble.hue, s: 0.5, l: 0.5 }.to_color().with_alpha(0.18);
            surface.fill_circle(bubble.pos, bubble.radius, color);
        }
    }
}

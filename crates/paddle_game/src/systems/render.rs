use crate::components::{Bounds, Fill};
use paddle_core::ecs::{EntityId, Family, System, World};
use paddle_core::surface::Surface;
use paddle_core::time::Tick;

/// Fills every coloured rectangle.
pub struct RenderSystem;

impl System for RenderSystem {
    fn name(&self) -> &str {
        "render"
    }

    fn family(&self) -> Family {
        Family::of::<(Bounds, Fill)>()
    }

    fn draw_entity(&self, entity: EntityId, world: &World, surface: &mut dyn Surface, _tick: Tick) {
        let entity = &world[entity];
        let bounds = entity.get::<Bounds>().0;

        surface.set_color(entity.get::<Fill>().0);
        surface.fill_rect(
            bounds.left() as i32,
            bounds.top() as i32,
            bounds.width() as i32,
            bounds.height() as i32,
        );
    }
}

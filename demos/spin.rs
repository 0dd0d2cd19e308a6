use anyhow::{Context, Result};
use arcball::{ArcBallSettings, WinitArcBall};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

fn main() -> Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Arcball")
        .build(&event_loop)
        .context("Failed to create window")?;

    let size = window.inner_size();
    let mut arcball = WinitArcBall::new(
        ArcBallSettings::new(size.width as f32, size.height as f32).build()?,
    );
    arcball.set_active(true);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                event => {
                    if arcball.handle_events(&event) {
                        window.request_redraw();
                    }
                }
            },
            Event::RedrawRequested(_) => {
                println!("{}", arcball.matrix());
            }
            _ => (),
        }
    })
}

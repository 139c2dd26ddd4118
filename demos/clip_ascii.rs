// MIT/Apache2 License

use chalkboard_clip::{ClipStack, PathElement, Point, Rect, Result};
use lyon_path::{math::point, Path};

const WIDTH: usize = 64;
const HEIGHT: usize = 32;

fn main() -> Result {
    env_logger::init();

    let mut stack = ClipStack::new(Rect::new(0.0, 0.0, WIDTH as f64, HEIGHT as f64));

    // a rounded blob, built with lyon
    let mut builder = Path::builder();
    builder.begin(point(8.0, 16.0));
    builder.cubic_bezier_to(point(8.0, -4.0), point(56.0, -4.0), point(56.0, 16.0));
    builder.cubic_bezier_to(point(56.0, 36.0), point(8.0, 36.0), point(8.0, 16.0));
    builder.end(true);
    let blob = PathElement::from_events(builder.build().iter());

    stack.push_rect(Rect::new(4.0, 2.0, 48.0, 28.0));
    stack.push_path(&blob, false)?;

    // punch a diamond out of the middle
    let diamond = [
        PathElement::MoveTo {
            point: Point::new(32.0, 8.0),
        },
        PathElement::LineTo {
            point: Point::new(40.0, 16.0),
        },
        PathElement::LineTo {
            point: Point::new(32.0, 24.0),
        },
        PathElement::LineTo {
            point: Point::new(24.0, 16.0),
        },
        PathElement::Close,
        PathElement::MoveTo {
            point: Point::new(0.0, 0.0),
        },
        PathElement::LineTo {
            point: Point::new(WIDTH as f64, 0.0),
        },
        PathElement::LineTo {
            point: Point::new(WIDTH as f64, HEIGHT as f64),
        },
        PathElement::LineTo {
            point: Point::new(0.0, HEIGHT as f64),
        },
        PathElement::Close,
    ];
    stack.push_path(&diamond, false)?;

    println!("clip depth {}, bounds {:?}", stack.depth(), stack.bounds());
    for row in 0..HEIGHT {
        let line: String = (0..WIDTH)
            .map(|col| {
                if stack.is_visible(col as f64 + 0.5, row as f64 + 0.5) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{}", line);
    }

    stack.pop();
    stack.pop();
    stack.pop();
    println!("clip depth {}, bounds {:?}", stack.depth(), stack.bounds());

    Ok(())
}

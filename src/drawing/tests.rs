use {
  super::*,
  anyhow::Result,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

const BACKGROUND: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

#[test] fn render_reference_plot() -> Result<()> {
  let options = PlotOptions {
    start: 1,
    multiplier: 7,
    modulus: 100,
    iterations: 100,
    ..PlotOptions::default()
  };
  let mut rng = Pcg64::seed_from_u64(0);
  let image = render(&options, 512, 512, &mut rng)?;

  assert_eq!(image.dimensions(), (512, 512));
  // the figure is inset from the viewport edge, so corners stay background
  for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
    assert_eq!(image.get_pixel(x, y), &BACKGROUND);
  }
  assert!(image.pixels().any(|pixel| pixel != &BACKGROUND));

  image.save(std::env::temp_dir().join("modulus_circle_vortex.png"))?;
  Ok(())
}

#[test] fn render_is_deterministic_under_seed() -> Result<()> {
  let options = PlotOptions::default();
  let a = render(&options, 128, 128, &mut Pcg64::seed_from_u64(3))?;
  let b = render(&options, 128, 128, &mut Pcg64::seed_from_u64(3))?;
  assert_eq!(a.as_raw(), b.as_raw());
  Ok(())
}

#[test] fn non_square_canvas_letterboxes() -> Result<()> {
  let options = PlotOptions::default();
  let image = render(&options, 256, 128, &mut Pcg64::seed_from_u64(0))?;
  assert_eq!(image.dimensions(), (256, 128));
  // the circle lives in the centered square; the margins stay background
  assert_eq!(image.get_pixel(2, 64), &BACKGROUND);
  assert_eq!(image.get_pixel(253, 64), &BACKGROUND);
  Ok(())
}

#[test] fn canvas_draw_calls_compose() -> Result<()> {
  let mut canvas = ImageCanvas::new(
    64, 64, 1.5,
    [0x00, 0x00, 0x00], [0xFF, 0xFF, 0xFF],
    14
  );
  canvas.draw_circle(Point2D::origin(), 1.0);
  canvas.draw_point(Point2D::new(0.0, 1.0));
  canvas.draw_label(Point2D::new(0.0, 1.1), "1");
  canvas.draw_arc(Point2D::new(0.0, 1.0), Point2D::new(1.0, 0.0), [0x46, 0x82, 0xB4]);
  // a degenerate arc must not panic
  canvas.draw_arc(Point2D::new(1.0, 0.0), Point2D::new(1.0, 0.0), [0x46, 0x82, 0xB4]);
  canvas.save(std::env::temp_dir().join("modulus_circle_canvas.png"))?;

  let image = canvas.into_image();
  assert!(image.pixels().any(|pixel| pixel != &BACKGROUND));
  Ok(())
}

#[test] fn open_paths_render_too() -> Result<()> {
  // multiplier 10 mod 100 collapses everything onto a handful of points
  let options = PlotOptions {
    start: 1,
    multiplier: 10,
    modulus: 100,
    iterations: 20,
    ..PlotOptions::default()
  };
  let image = render(&options, 128, 128, &mut Pcg64::seed_from_u64(1))?;
  assert!(image.pixels().any(|pixel| pixel != &BACKGROUND));
  Ok(())
}

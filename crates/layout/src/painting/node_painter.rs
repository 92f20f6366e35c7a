use crate::node::LayoutNode;
use crate::LayoutError;
use layoutimg_traits::{FontQuery, Renderer};
use layoutimg_types::geometry::Point;

/// Issues the draw requests for a single node, children excluded.
///
/// Order: canvas expansion, background color, background image, text.
pub fn paint_node<R>(node: &LayoutNode, renderer: &mut R) -> Result<(), LayoutError>
where
    R: Renderer + ?Sized,
{
    let rect = node.laid_out_rect()?;
    let env = node.env();

    renderer.expand(rect)?;

    if let Some(color) = env.background_color()? {
        renderer.fill_rect(rect, color)?;
    }

    if let Some(path) = env.background_image()? {
        renderer.draw_image(rect, path)?;
    }

    if env.render_text()? {
        let text = node.text().unwrap_or_default();
        let font = FontQuery::new(env.font()?, env.font_size()?);
        let text_width = renderer.measure_text(text, font)?.width;
        let padding = env.text_align()?.padding(rect.width, text_width);
        renderer.draw_text(
            Point::new(rect.x.saturating_add(padding), rect.y),
            text,
            font,
            env.text_color()?,
        )?;
    }

    Ok(())
}

use crate::models::ValidatedRequest;

/// Renders the mockup prompt. The monogram is always embedded uppercased.
pub fn build_prompt(request: &ValidatedRequest<'_>) -> String {
    format!(
        "Generate a high-resolution, professional commercial product photography of {product}\n\
         The product should have a beautifully embroidered monogram \"{monogram}\" \
         on the left chest or top corner.\n\
         The embroidery thread should be a sophisticated {thread} silk.\n\
         Style: High-end boutique, Palm Beach 1960s aesthetic, sharp focus, 4k.",
        product = request.product_prompt,
        monogram = request.monogram.to_uppercase(),
        thread = request.thread_color,
    )
}

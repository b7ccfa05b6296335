//! The comprehensive asset set: room backgrounds, scene-specific props,
//! UI chrome, and particle sprites.
//!
//! Room backgrounds render at 1920x1080 with 30 steps; everything else
//! uses the 512x512 default canvas.

use atelier_core::asset::AssetRequest;

/// The three escape-room backgrounds (full HD, extra sampling steps).
pub fn room_backgrounds() -> Vec<AssetRequest> {
    vec![
        AssetRequest::new(
            "room-backgrounds/room1-attic.png",
            "Victorian attic escape room background, dusty forgotten attic space with antique trunk, torn photographs scattered, old candle holders, mysterious boxes and chests, warm candlelight glow through dust motes, dark moody atmospheric, forgotten treasures, highly detailed, painting style, cinematic lighting, 8k quality, wide angle view",
            "blurry, low quality, modern, bright lights, clean, organized",
        )
        .with_dimensions(1920, 1080)
        .with_steps(30),
        AssetRequest::new(
            "room-backgrounds/room2-clock-tower.png",
            "Victorian clock tower interior escape room background, massive brass gears and clockwork mechanisms, golden warm light filtering through clock face, intricate machinery, telegraph apparatus, brass pipes and pressure gauges, steampunk aesthetic, dark moody atmospheric, highly detailed, painting style, cinematic lighting, 8k quality, wide angle view",
            "blurry, low quality, modern, digital, clean, simple",
        )
        .with_dimensions(1920, 1080)
        .with_steps(30),
        AssetRequest::new(
            "room-backgrounds/room3-garden-conservatory.png",
            "Victorian garden conservatory escape room background, glass roof with ethereal green light filtering through, exotic plants and botanical specimens, antique botanical illustrations on walls, mysterious hybrid flowers, brass plant containers, vine-covered trellis, atmospheric mysterious, highly detailed, painting style, cinematic lighting, 8k quality, wide angle view",
            "blurry, low quality, modern greenhouse, bright daylight, simple",
        )
        .with_dimensions(1920, 1080)
        .with_steps(30),
    ]
}

/// Scene-specific puzzle props added with the room backgrounds.
pub fn scene_props() -> Vec<AssetRequest> {
    vec![
        AssetRequest::new(
            "puzzles/music-box.png",
            "Victorian music box puzzle mechanism, ornate brass cylinder with pins, intricate gear mechanism, decorative wooden box with carved lid, mysterious musical notes visualized, dark moody atmospheric, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, plastic, bright",
        ),
        AssetRequest::new(
            "puzzles/mirror-reflection.png",
            "Victorian ornate mirror with mysterious reflection, antique gilded frame with intricate scrollwork, dark atmospheric room reflected, mysterious supernatural glow, cracked mirror effect, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern mirror, bright, clean",
        ),
        AssetRequest::new(
            "puzzles/treasure-chest.png",
            "Victorian treasure chest or strongbox, ornate brass fittings and lock, aged wood with carved details, mysterious glow from within, dark atmospheric, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, plastic, bright",
        ),
        AssetRequest::new(
            "puzzles/cryptex.png",
            "Victorian cryptex cylinder puzzle, brass rotating rings with letters, intricate mechanical puzzle device, mysterious and ornate, dark atmospheric lighting, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, plastic, bright",
        ),
        AssetRequest::new(
            "puzzles/mysterious-painting.png",
            "Victorian oil painting in ornate frame, mysterious portrait with hidden clues, dark moody atmosphere, aged canvas texture, supernatural elements, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern art, bright, photograph",
        ),
        AssetRequest::new(
            "puzzles/pendulum.png",
            "Victorian pendulum mechanism, ornate brass pendulum bob and rod, intricate clockwork, dark atmospheric lighting, mysterious time aesthetic, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
        AssetRequest::new(
            "puzzles/bell-collection.png",
            "Collection of Victorian brass bells of various sizes, ornate decorative bells, mysterious sound visualization, dark atmospheric lighting, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
        AssetRequest::new(
            "puzzles/botanical-hybrid.png",
            "Victorian botanical illustration of mysterious hybrid plant, scientific drawing style, exotic flower with unusual features, aged paper background, highly detailed, botanical art style, 8k quality",
            "blurry, low quality, cartoon, modern, bright",
        ),
        AssetRequest::new(
            "puzzles/seed-packets.png",
            "Collection of Victorian seed packets, antique paper packets with botanical illustrations, mysterious plant names, aged and weathered, dark atmospheric, highly detailed, vintage style, 8k quality",
            "blurry, low quality, modern, clean, bright",
        ),
        AssetRequest::new(
            "puzzles/glass-vials.png",
            "Collection of Victorian glass vials and potions, mysterious colored liquids, ornate brass stoppers, dark atmospheric lighting, alchemical aesthetic, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, plastic, bright",
        ),
    ]
}

/// Menu and overlay chrome.
pub fn ui_chrome() -> Vec<AssetRequest> {
    vec![
        AssetRequest::new(
            "ui/victory-screen.png",
            "Victorian victory celebration screen, ornate golden frame with Congratulations text visualized, warm golden light, confetti and celebration elements, elegant decorative borders, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, simple, bright flat colors",
        ),
        AssetRequest::new(
            "ui/defeat-screen.png",
            "Victorian defeat or game over screen, dark moody atmosphere, ornate frame with mysterious elements, fading light, dramatic shadows, mysterious aesthetic, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, bright, cartoon",
        ),
        AssetRequest::new(
            "ui/loading-screen.png",
            "Victorian loading screen background, ornate decorative frame, mysterious clockwork or gears turning, atmospheric fog effects, mysterious aesthetic, highly detailed, painting style, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
        AssetRequest::new(
            "ui/puzzle-frame.png",
            "Victorian ornate puzzle frame, decorative border with baroque scrollwork, gold and bronze colors, intricate design, dark background, highly detailed, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
        AssetRequest::new(
            "ui/dialog-box.png",
            "Victorian dialog box background, aged parchment texture, ornate decorative border, elegant and mysterious, dark atmospheric, highly detailed, 8k quality",
            "blurry, low quality, modern, clean, bright",
        ),
        AssetRequest::new(
            "ui/inventory-slot.png",
            "Victorian inventory slot background, ornate decorative frame, antique aged texture, mysterious aesthetic, dark atmospheric, highly detailed, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
        AssetRequest::new(
            "ui/hint-icon.png",
            "Victorian hint icon or question mark, ornate decorative design, brass or gold, mysterious lightbulb visual, dark atmospheric, highly detailed, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
        AssetRequest::new(
            "ui/settings-icon.png",
            "Victorian settings or gear icon, ornate decorative gear design, brass or gold, mechanical aesthetic, dark atmospheric, highly detailed, 8k quality",
            "blurry, low quality, modern, simple, bright",
        ),
    ]
}

/// Particle effect sprites, rendered on dark backgrounds for extraction.
pub fn particle_sprites() -> Vec<AssetRequest> {
    vec![
        AssetRequest::new(
            "particles/dust-motes.png",
            "Victorian dust motes particle effect, floating dust particles in light beam, atmospheric fog, golden warm light, semi-transparent, highly detailed, on dark background for extraction, 8k quality",
            "blurry, low quality, solid objects, bright flat background",
        ),
        AssetRequest::new(
            "particles/candle-glow.png",
            "Victorian candlelight glow particle effect, warm golden light rays, flickering flame visualization, atmospheric lighting, semi-transparent, highly detailed, on dark background for extraction, 8k quality",
            "blurry, low quality, electric light, solid objects",
        ),
        AssetRequest::new(
            "particles/magic-sparkles.png",
            "Victorian mysterious magic sparkles particle effect, golden glowing particles, supernatural aesthetic, ethereal and mysterious, semi-transparent, highly detailed, on dark background for extraction, 8k quality",
            "blurry, low quality, cartoon, modern, solid objects",
        ),
        AssetRequest::new(
            "particles/smoke-effect.png",
            "Victorian smoke or fog particle effect, atmospheric swirling smoke, mysterious fog, dark moody, semi-transparent, highly detailed, on dark background for extraction, 8k quality",
            "blurry, low quality, cartoon, solid objects, bright",
        ),
        AssetRequest::new(
            "particles/leaves-particles.png",
            "Victorian garden leaves particle effect, falling autumn leaves, botanical aesthetic, dark atmospheric, semi-transparent, highly detailed, on dark background for extraction, 8k quality",
            "blurry, low quality, cartoon, modern, solid objects",
        ),
        AssetRequest::new(
            "particles/clockwork-gears.png",
            "Victorian clockwork gears particle effect, small gear silhouettes, mechanical aesthetic, brass and gold colors, semi-transparent, highly detailed, on dark background for extraction, 8k quality",
            "blurry, low quality, cartoon, modern, solid objects",
        ),
    ]
}

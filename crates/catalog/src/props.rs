//! Puzzle prop catalogs: the core Victorian puzzle objects plus the
//! follow-up batch added for the clock-tower and conservatory rooms.
//!
//! All props render on the default 512x512 canvas at 25 steps.

use atelier_core::asset::AssetRequest;

/// The sixteen core puzzle props.
pub fn puzzle_props() -> Vec<AssetRequest> {
    vec![
        AssetRequest::new(
            "puzzles/cipher-wheel.png",
            "Victorian era antique cipher wheel decoder disk, brass and copper mechanical puzzle device, intricate engravings, mysterious symbols around the edge, ornate decorative design, dark moody atmospheric lighting, detailed steampunk aesthetic, highly detailed, painting style, 8k quality",
            "blurry, low quality, cartoon, anime, modern, bright colors",
        ),
        AssetRequest::new(
            "puzzles/treasure-map.png",
            "Old weathered treasure map parchment, Victorian era antique paper, mysterious hand-drawn paths and X marks, aged edges, tea-stained, cryptic symbols and clues, dark moody atmosphere, highly detailed, vintage cartography style, dramatic lighting",
            "blurry, low quality, modern, clean, bright colors",
        ),
        AssetRequest::new(
            "puzzles/vintage-lock.png",
            "Antique Victorian padlock mechanism, ornate brass lock with intricate keyhole, mysterious and detailed metalwork, aged patina, dark atmospheric lighting, steampunk aesthetic, highly detailed, dramatic shadows, painting style",
            "blurry, low quality, modern, plastic, bright colors",
        ),
        AssetRequest::new(
            "puzzles/antique-keys.png",
            "Collection of antique Victorian keys, ornate brass and iron keys of various sizes, intricate decorative handles, aged patina, mysterious atmosphere, dark moody lighting, arranged on old wooden surface, highly detailed, painting style",
            "blurry, low quality, modern, shiny, bright colors",
        ),
        AssetRequest::new(
            "puzzles/mysterious-glyphs.png",
            "Ancient mysterious symbols and glyphs carved in stone, occult mystical runes, Victorian esoteric engravings, arcane alphabet, dark atmospheric lighting, weathered texture, highly detailed, mysterious and ominous, painting style",
            "blurry, low quality, cartoon, modern, bright colors",
        ),
        AssetRequest::new(
            "puzzles/puzzle-texture.png",
            "Victorian puzzle piece texture pattern, ornate decorative border design, antique paper texture with mysterious symbols, seamless pattern, dark moody aesthetic, aged and weathered, highly detailed, painting style",
            "blurry, low quality, modern, bright colors",
        ),
        AssetRequest::new(
            "puzzles/clue-letter.png",
            "Antique Victorian letter with mysterious clue, aged parchment paper, elegant calligraphy handwriting, wax seal, folded edges, dark atmospheric lighting, mysterious atmosphere, highly detailed, vintage document style",
            "blurry, low quality, modern, clean paper, bright colors",
        ),
        AssetRequest::new(
            "puzzles/clue-note.png",
            "Torn old note with cryptic message, Victorian era paper fragment, handwritten mysterious text, aged and weathered edges, dark moody atmosphere, ink stains, highly detailed, dramatic lighting, vintage style",
            "blurry, low quality, modern, clean, bright colors",
        ),
        AssetRequest::new(
            "puzzles/clue-photograph.png",
            "Antique Victorian photograph sepia tone, mysterious old portrait, daguerreotype style, ornate decorative frame, aged and faded, dark atmospheric, mysterious Victorian aesthetic, highly detailed, vintage photography",
            "blurry, low quality, modern photo, color, bright",
        ),
        AssetRequest::new(
            "puzzles/victorian-ornament.png",
            "Victorian era decorative ornament frame, ornate baroque scrollwork design, antique gold and bronze, intricate floral patterns, dark atmospheric lighting, mysterious gothic aesthetic, highly detailed, elegant and dramatic",
            "blurry, low quality, modern, simple, bright colors",
        ),
        AssetRequest::new(
            "puzzles/candle-holder.png",
            "Antique Victorian candelabra brass candle holder, ornate decorative metalwork, flickering candlelight, dark moody atmosphere, mysterious shadows, dramatic lighting, highly detailed, gothic aesthetic, painting style",
            "blurry, low quality, modern, electric light, bright",
        ),
        AssetRequest::new(
            "puzzles/magnifying-glass.png",
            "Antique Victorian magnifying glass detective tool, ornate brass handle with intricate engravings, round glass lens, dark atmospheric lighting, mysterious detective aesthetic, highly detailed, vintage style, dramatic shadows",
            "blurry, low quality, modern, plastic, bright colors",
        ),
        AssetRequest::new(
            "puzzles/secret-compartment.png",
            "Victorian secret compartment in antique wooden furniture, hidden drawer mechanism, mysterious dark interior, ornate carved wood, dramatic lighting, hidden treasure aesthetic, highly detailed, atmospheric, painting style",
            "blurry, low quality, modern, bright colors, simple",
        ),
        AssetRequest::new(
            "puzzles/hourglass.png",
            "Antique Victorian hourglass sand timer, ornate brass and glass construction, flowing sand, dark moody atmosphere, mysterious time running out aesthetic, dramatic lighting, highly detailed, vintage steampunk style",
            "blurry, low quality, modern, plastic, bright colors",
        ),
        AssetRequest::new(
            "puzzles/codebook.png",
            "Ancient Victorian codebook cipher manual, leather-bound antique book, mysterious symbols and codes written inside, aged pages, ornate cover design, dark atmospheric lighting, highly detailed, vintage occult aesthetic",
            "blurry, low quality, modern, paperback, bright colors",
        ),
        AssetRequest::new(
            "puzzles/compass.png",
            "Antique Victorian brass compass, ornate navigational instrument, intricate engravings, mysterious glowing needle, dark atmospheric lighting, adventure aesthetic, highly detailed, vintage steampunk style, dramatic shadows",
            "blurry, low quality, modern, plastic, digital, bright",
        ),
    ]
}

/// The four follow-up props added after the initial prop batch shipped.
pub fn additional_props() -> Vec<AssetRequest> {
    vec![
        AssetRequest::new(
            "puzzles/clock-hands.png",
            "Victorian ornate clock hands, antique brass hour and minute hands for clock face, intricate decorative filigree design, steampunk aesthetic, dark moody atmospheric lighting, elegant baroque style, highly detailed, isolated on dark background, painting style",
            "blurry, low quality, modern, digital, bright colors, cartoon",
        ),
        AssetRequest::new(
            "puzzles/gears-collection.png",
            "Collection of Victorian steampunk gears and cogs, brass and copper mechanical parts, various sizes of interlocking gear wheels, intricate tooth details, aged metal patina, dark atmospheric lighting, mechanical aesthetic, highly detailed, painting style",
            "blurry, low quality, modern, plastic, bright colors, clean",
        ),
        AssetRequest::new(
            "puzzles/telegraph-key.png",
            "Antique Victorian telegraph key Morse code transmitter, brass telegraph tapping key on wooden base, vintage communication device, intricate mechanical details, dark moody atmospheric lighting, steampunk aesthetic, highly detailed, painting style",
            "blurry, low quality, modern, electronic, bright colors",
        ),
        AssetRequest::new(
            "puzzles/botanical-illustration.png",
            "Victorian botanical illustration vintage style, scientific plant drawing with flowers and leaves, antique naturalist field guide aesthetic, sepia tones and muted colors, detailed botanical artwork, aged paper background, dark atmospheric, highly detailed",
            "blurry, low quality, modern, bright colors, photograph",
        ),
    ]
}

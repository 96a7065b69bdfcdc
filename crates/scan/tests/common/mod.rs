use {
    base::Vec2,
    image::{Image, PixelFormat},
};

/// Version 1-M symbol encoding "4376471154038".
pub const GOLDEN_PAYLOAD: &str = "4376471154038";
pub const GOLDEN: [&str; 21] = [
    "#######.....#.#######",
    "#.....#..#....#.....#",
    "#.###.#...##..#.###.#",
    "#.###.#...#...#.###.#",
    "#.###.#..####.#.###.#",
    "#.....#.#.#...#.....#",
    "#######.#.#.#.#######",
    ".........#...........",
    "#..#.##.######.#.....",
    "###.#..##..#.#.#.##..",
    "#..#.####.##..###...#",
    "..#.#..#....#####....",
    "..#...##.#.#.###.##..",
    "........#.#..####.##.",
    "#######...###.#.####.",
    "#.....#.#.....##....#",
    "#.###.#..##.###..#.##",
    "#.###.#.#.#..####..##",
    "#.###.#..###.###.#..#",
    "#.....#..####..##..#.",
    "#######.###..#.###...",
];

pub const MODULE_PX: usize = 8;
pub const QUIET_MODULES: usize = 4;

/// White RGB8 canvas with the golden symbol drawn at each module offset.
pub fn render(size_modules: Vec2<usize>, origins: &[Vec2<usize>]) -> Image {
    let size = Vec2::new(size_modules.x * MODULE_PX, size_modules.y * MODULE_PX);
    let mut image = Image::filled(size, [255, 255, 255]);
    for origin in origins {
        for (row, line) in GOLDEN.iter().enumerate() {
            for (col, module) in line.bytes().enumerate() {
                if module != b'#' {
                    continue;
                }
                for py in 0..MODULE_PX {
                    for px in 0..MODULE_PX {
                        let x = (origin.x + col) * MODULE_PX + px;
                        let y = (origin.y + row) * MODULE_PX + py;
                        let offset = (y * size.x + x) * 3;
                        image.data[offset..offset + 3].copy_from_slice(&[0, 0, 0]);
                    }
                }
            }
        }
    }
    image
}

/// One golden symbol with its quiet zone.
pub fn single_symbol() -> Image {
    let side = 21 + 2 * QUIET_MODULES;
    render(
        Vec2::new(side, side),
        &[Vec2::new(QUIET_MODULES, QUIET_MODULES)],
    )
}

pub fn to_luma(image: &Image) -> Image {
    let luma = image.to_luma().unwrap();
    assert_eq!(luma.format, PixelFormat::Luma8);
    luma
}

//! The 22 x 10 palette table.

use super::Rgb;

/// Rows follow [`ColorFamily::ALL`](super::ColorFamily::ALL), columns follow
/// [`Shade::ALL`](super::Shade::ALL).
pub(super) const TABLE: [[Rgb; 10]; 22] = [
    // slate
    [
        Rgb::new(248, 250, 252),
        Rgb::new(241, 245, 249),
        Rgb::new(226, 232, 240),
        Rgb::new(203, 213, 225),
        Rgb::new(148, 163, 184),
        Rgb::new(100, 116, 139),
        Rgb::new(71, 85, 105),
        Rgb::new(51, 65, 85),
        Rgb::new(30, 41, 59),
        Rgb::new(15, 23, 42),
    ],
    // gray
    [
        Rgb::new(249, 250, 251),
        Rgb::new(243, 244, 246),
        Rgb::new(229, 231, 235),
        Rgb::new(209, 213, 219),
        Rgb::new(156, 163, 175),
        Rgb::new(107, 114, 128),
        Rgb::new(75, 85, 99),
        Rgb::new(55, 65, 81),
        Rgb::new(31, 41, 55),
        Rgb::new(17, 24, 39),
    ],
    // zinc
    [
        Rgb::new(250, 250, 250),
        Rgb::new(244, 244, 245),
        Rgb::new(228, 228, 231),
        Rgb::new(212, 212, 216),
        Rgb::new(161, 161, 170),
        Rgb::new(113, 113, 122),
        Rgb::new(82, 82, 91),
        Rgb::new(63, 63, 70),
        Rgb::new(39, 39, 42),
        Rgb::new(24, 24, 27),
    ],
    // neutral
    [
        Rgb::new(250, 250, 250),
        Rgb::new(245, 245, 245),
        Rgb::new(229, 229, 229),
        Rgb::new(212, 212, 212),
        Rgb::new(163, 163, 163),
        Rgb::new(115, 115, 115),
        Rgb::new(82, 82, 82),
        Rgb::new(64, 64, 64),
        Rgb::new(38, 38, 38),
        Rgb::new(23, 23, 23),
    ],
    // stone
    [
        Rgb::new(250, 250, 249),
        Rgb::new(245, 245, 244),
        Rgb::new(231, 229, 228),
        Rgb::new(214, 211, 209),
        Rgb::new(168, 162, 158),
        Rgb::new(120, 113, 108),
        Rgb::new(87, 83, 78),
        Rgb::new(68, 64, 60),
        Rgb::new(41, 37, 36),
        Rgb::new(28, 25, 23),
    ],
    // red
    [
        Rgb::new(254, 242, 242),
        Rgb::new(254, 226, 226),
        Rgb::new(254, 202, 202),
        Rgb::new(252, 165, 165),
        Rgb::new(248, 113, 113),
        Rgb::new(239, 68, 68),
        Rgb::new(220, 38, 38),
        Rgb::new(185, 28, 28),
        Rgb::new(153, 27, 27),
        Rgb::new(127, 29, 29),
    ],
    // orange
    [
        Rgb::new(255, 247, 237),
        Rgb::new(255, 237, 213),
        Rgb::new(254, 215, 170),
        Rgb::new(253, 186, 116),
        Rgb::new(251, 146, 60),
        Rgb::new(249, 115, 22),
        Rgb::new(234, 88, 12),
        Rgb::new(194, 65, 12),
        Rgb::new(154, 52, 18),
        Rgb::new(124, 45, 18),
    ],
    // amber
    [
        Rgb::new(255, 251, 235),
        Rgb::new(254, 243, 199),
        Rgb::new(253, 230, 138),
        Rgb::new(252, 211, 77),
        Rgb::new(251, 191, 36),
        Rgb::new(245, 158, 11),
        Rgb::new(217, 119, 6),
        Rgb::new(180, 83, 9),
        Rgb::new(146, 64, 14),
        Rgb::new(120, 53, 15),
    ],
    // yellow
    [
        Rgb::new(254, 252, 232),
        Rgb::new(254, 249, 195),
        Rgb::new(254, 240, 138),
        Rgb::new(253, 224, 71),
        Rgb::new(250, 204, 21),
        Rgb::new(234, 179, 8),
        Rgb::new(202, 138, 4),
        Rgb::new(161, 98, 7),
        Rgb::new(133, 77, 14),
        Rgb::new(113, 63, 18),
    ],
    // lime
    [
        Rgb::new(247, 254, 231),
        Rgb::new(236, 252, 203),
        Rgb::new(217, 249, 157),
        Rgb::new(190, 242, 100),
        Rgb::new(163, 230, 53),
        Rgb::new(132, 204, 22),
        Rgb::new(101, 163, 13),
        Rgb::new(77, 124, 15),
        Rgb::new(63, 98, 18),
        Rgb::new(54, 83, 20),
    ],
    // green
    [
        Rgb::new(240, 253, 244),
        Rgb::new(220, 252, 231),
        Rgb::new(187, 247, 208),
        Rgb::new(134, 239, 172),
        Rgb::new(74, 222, 128),
        Rgb::new(34, 197, 94),
        Rgb::new(22, 163, 74),
        Rgb::new(21, 128, 61),
        Rgb::new(22, 101, 52),
        Rgb::new(20, 83, 45),
    ],
    // emerald
    [
        Rgb::new(236, 253, 245),
        Rgb::new(209, 250, 229),
        Rgb::new(167, 243, 208),
        Rgb::new(110, 231, 183),
        Rgb::new(52, 211, 153),
        Rgb::new(16, 185, 129),
        Rgb::new(5, 150, 105),
        Rgb::new(4, 120, 87),
        Rgb::new(6, 95, 70),
        Rgb::new(6, 78, 59),
    ],
    // teal
    [
        Rgb::new(240, 253, 250),
        Rgb::new(204, 251, 241),
        Rgb::new(153, 246, 228),
        Rgb::new(94, 234, 212),
        Rgb::new(45, 212, 191),
        Rgb::new(20, 184, 166),
        Rgb::new(13, 148, 136),
        Rgb::new(15, 118, 110),
        Rgb::new(17, 94, 89),
        Rgb::new(19, 78, 74),
    ],
    // cyan
    [
        Rgb::new(236, 254, 255),
        Rgb::new(207, 250, 254),
        Rgb::new(165, 243, 252),
        Rgb::new(103, 232, 249),
        Rgb::new(34, 211, 238),
        Rgb::new(6, 182, 212),
        Rgb::new(8, 145, 178),
        Rgb::new(14, 116, 144),
        Rgb::new(21, 94, 117),
        Rgb::new(22, 78, 99),
    ],
    // sky
    [
        Rgb::new(240, 249, 255),
        Rgb::new(224, 242, 254),
        Rgb::new(186, 230, 253),
        Rgb::new(125, 211, 252),
        Rgb::new(56, 189, 248),
        Rgb::new(14, 165, 233),
        Rgb::new(2, 132, 199),
        Rgb::new(3, 105, 161),
        Rgb::new(7, 89, 133),
        Rgb::new(12, 74, 110),
    ],
    // blue
    [
        Rgb::new(239, 246, 255),
        Rgb::new(219, 234, 254),
        Rgb::new(191, 219, 254),
        Rgb::new(147, 197, 253),
        Rgb::new(96, 165, 250),
        Rgb::new(59, 130, 246),
        Rgb::new(37, 99, 235),
        Rgb::new(29, 78, 216),
        Rgb::new(30, 64, 175),
        Rgb::new(30, 58, 138),
    ],
    // indigo
    [
        Rgb::new(238, 242, 255),
        Rgb::new(224, 231, 255),
        Rgb::new(199, 210, 254),
        Rgb::new(165, 180, 252),
        Rgb::new(129, 140, 248),
        Rgb::new(99, 102, 241),
        Rgb::new(79, 70, 229),
        Rgb::new(67, 56, 202),
        Rgb::new(55, 48, 163),
        Rgb::new(49, 46, 129),
    ],
    // violet
    [
        Rgb::new(245, 243, 255),
        Rgb::new(237, 233, 254),
        Rgb::new(221, 214, 254),
        Rgb::new(196, 181, 253),
        Rgb::new(167, 139, 250),
        Rgb::new(139, 92, 246),
        Rgb::new(124, 58, 237),
        Rgb::new(109, 40, 217),
        Rgb::new(91, 33, 182),
        Rgb::new(76, 29, 149),
    ],
    // purple
    [
        Rgb::new(245, 243, 255),
        Rgb::new(237, 233, 254),
        Rgb::new(221, 214, 254),
        Rgb::new(196, 181, 253),
        Rgb::new(167, 139, 250),
        Rgb::new(139, 92, 246),
        Rgb::new(124, 58, 237),
        Rgb::new(109, 40, 217),
        Rgb::new(91, 33, 182),
        Rgb::new(76, 29, 149),
    ],
    // fuchsia
    [
        Rgb::new(253, 244, 255),
        Rgb::new(250, 232, 255),
        Rgb::new(245, 208, 254),
        Rgb::new(240, 171, 252),
        Rgb::new(232, 121, 249),
        Rgb::new(217, 70, 239),
        Rgb::new(192, 38, 211),
        Rgb::new(162, 28, 175),
        Rgb::new(134, 25, 143),
        Rgb::new(112, 26, 117),
    ],
    // pink
    [
        Rgb::new(253, 242, 248),
        Rgb::new(252, 231, 243),
        Rgb::new(251, 207, 232),
        Rgb::new(249, 168, 212),
        Rgb::new(244, 114, 182),
        Rgb::new(236, 72, 153),
        Rgb::new(219, 39, 119),
        Rgb::new(190, 24, 93),
        Rgb::new(157, 23, 77),
        Rgb::new(131, 24, 67),
    ],
    // rose
    [
        Rgb::new(255, 241, 242),
        Rgb::new(255, 228, 230),
        Rgb::new(254, 205, 211),
        Rgb::new(253, 164, 175),
        Rgb::new(251, 113, 133),
        Rgb::new(244, 63, 94),
        Rgb::new(225, 29, 72),
        Rgb::new(190, 18, 60),
        Rgb::new(159, 18, 57),
        Rgb::new(136, 19, 55),
    ],
];

//! Print the section summary of a traced sample outline.
//!
//! Usage:
//!   cargo run -p xsection --example section_demo
//!   cargo run -p xsection --example section_demo -- centroidal

use xsection::prelude::*;

const SAMPLE: &[(f64, f64)] = &[
    (0.8071752, 1.3929228),
    (0.8071752, 1.3929228),
    (0.8600110, 1.3809864),
    (0.8667849, 1.3579882),
    (0.8640753, 1.3254607),
    (0.8871063, 1.3025415),
    (0.9020088, 1.2673899),
    (0.9033635, 1.2430107),
    (0.8735587, 1.2388018),
    (0.8708492, 1.2184671),
    (0.8437538, 1.2210451),
    (0.8437538, 1.2413666),
    (0.8058204, 1.2533754),
    (0.7651775, 1.2545328),
    (0.7380822, 1.2489822),
    (0.7136964, 1.2231233),
    (0.7150511, 1.1838417),
    (0.7218250, 1.1527150),
    (0.6987940, 1.1471841),
    (0.6662796, 1.1172214),
    (0.6662796, 1.0901261),
    (0.6811820, 1.0874890),
    (0.7150511, 1.0686867),
    (0.7150511, 1.0375271),
    (0.6974392, 1.0198296),
    (0.6622153, 1.0196586),
    (0.6351200, 1.0357843),
    (0.6147985, 1.0343309),
    (0.6080247, 1.0519099),
    (0.5998961, 1.0654181),
    (0.5998961, 1.0830301),
    (0.6202176, 1.0939668),
    (0.6283462, 1.1224564),
    (0.6486676, 1.1401670),
    (0.6486676, 1.1930028),
    (0.6486676, 1.2092600),
    (0.6269914, 1.2294762),
    (0.6351200, 1.2620301),
    (0.6269914, 1.2863764),
    (0.6567962, 1.3068426),
    (0.6771177, 1.3394556),
    (0.6811820, 1.3584420),
    (0.7015035, 1.3666692),
    (0.7326631, 1.3600467),
    (0.7516298, 1.3574292),
    (0.7854989, 1.3616579),
];

fn main() {
    let centroidal = std::env::args().nth(1).as_deref() == Some("centroidal");
    let pts: Vec<Vec2<f64>> = SAMPLE.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    match section_properties(&pts) {
        Ok(props) => {
            println!("{}", "=".repeat(30));
            println!("{}", Report::new(&props).with_centroidal(centroidal));
        }
        Err(err) => eprintln!("sample outline rejected: {err}"),
    }
}

//! Table-driven trig over the 16-bit angle domain.
//!
//! Formats:
//! - Sine: 4096 steps per turn (angle >> 4), stored as a quarter wave of
//!   1025 f32 entries and mirrored into the other quadrants.
//! - Cosine: sine shifted by a quarter turn, so both share rounding.
//! - Arctangent: 1025 entries of atan(i/1024) in angle units for one octant.

use crate::angle::Angle;

const QUARTER_ENTRIES: usize = 1024;
const ARCTAN_ENTRIES: usize = 1024;

/// Table sine. Resolution is 16 angle units; the low four bits are ignored.
pub fn sins(angle: Angle) -> f32 {
    let index = (angle.units() >> 4) as usize;
    let offset = index & (QUARTER_ENTRIES - 1);
    match index / QUARTER_ENTRIES {
        0 => QUARTER_SINE[offset],
        1 => QUARTER_SINE[QUARTER_ENTRIES - offset],
        // 0.0 - v keeps the zero crossing at +0.0
        2 => 0.0 - QUARTER_SINE[offset],
        _ => 0.0 - QUARTER_SINE[QUARTER_ENTRIES - offset],
    }
}

/// Table cosine, i.e. `sins(angle + 0x4000)`.
#[inline]
pub fn coss(angle: Angle) -> f32 {
    sins(angle + Angle::QUARTER_TURN)
}

#[inline]
fn arctan_lookup(y: f32, x: f32) -> u16 {
    if x == 0.0 {
        ARCTAN[0]
    } else {
        let index = (y / x * 1024.0 + 0.5) as usize;
        ARCTAN[index.min(ARCTAN_ENTRIES)]
    }
}

/// Table arctangent. `y` is the forward (cosine) axis and `x` the lateral
/// (sine) axis, so `sins(atan2s(y, x))` has the sign of `x`.
pub fn atan2s(y: f32, x: f32) -> Angle {
    let units = if x >= 0.0 {
        if y >= 0.0 {
            if y >= x {
                arctan_lookup(x, y)
            } else {
                0x4000 - arctan_lookup(y, x)
            }
        } else {
            let y = -y;
            if y < x {
                0x4000 + arctan_lookup(y, x)
            } else {
                0x8000 - arctan_lookup(x, y)
            }
        }
    } else {
        let x = -x;
        if y < 0.0 {
            let y = -y;
            if y >= x {
                0x8000 + arctan_lookup(x, y)
            } else {
                0xC000 - arctan_lookup(y, x)
            }
        } else if y < x {
            0xC000 + arctan_lookup(y, x)
        } else {
            0u16.wrapping_sub(arctan_lookup(x, y))
        }
    };
    Angle(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_values_are_exact() {
        assert_eq!(sins(Angle(0)), 0.0);
        assert_eq!(sins(Angle(0x4000)), 1.0);
        assert_eq!(sins(Angle(0x8000)), 0.0);
        assert!(sins(Angle(0x8000)).is_sign_positive());
        assert_eq!(sins(Angle(0xC000)), -1.0);

        assert_eq!(coss(Angle(0)), 1.0);
        assert_eq!(coss(Angle(0x4000)), 0.0);
        assert_eq!(coss(Angle(0x8000)), -1.0);
        assert_eq!(coss(Angle(0xC000)), 0.0);
    }

    #[test]
    fn low_four_bits_do_not_change_the_lookup() {
        for base in [0u16, 0x1230, 0x7FF0, 0x9990, 0xFFF0] {
            for low in 0..16u16 {
                assert_eq!(sins(Angle(base | low)), sins(Angle(base)));
                assert_eq!(coss(Angle(base | low)), coss(Angle(base)));
            }
        }
    }

    #[test]
    fn quadrants_mirror_each_other() {
        for step in (0u16..0x1000).step_by(7) {
            let angle = Angle(step << 4);
            assert_eq!(sins(angle + Angle::HALF_TURN), 0.0 - sins(angle));
            assert_eq!(sins(Angle(0x8000) - angle - Angle(0x10)), sins(angle + Angle(0x10)));
        }
    }

    #[test]
    fn table_tracks_continuous_sine() {
        for units in (0u32..65536).step_by(613) {
            let angle = Angle(units as u16);
            let quantized = ((units >> 4) << 4) as f64;
            let ideal = (quantized * core::f64::consts::TAU / 65536.0).sin();
            assert!((sins(angle) as f64 - ideal).abs() < 1e-6, "angle={units}");
        }
    }

    #[test]
    fn atan2s_cardinal_directions() {
        assert_eq!(atan2s(1.0, 0.0), Angle(0));
        assert_eq!(atan2s(0.0, 1.0), Angle(0x4000));
        assert_eq!(atan2s(-1.0, 0.0), Angle(0x8000));
        assert_eq!(atan2s(0.0, -1.0), Angle(0xC000));
        assert_eq!(atan2s(0.0, 0.0), Angle(0));
    }

    #[test]
    fn atan2s_diagonals_land_on_octant_boundaries() {
        assert_eq!(atan2s(1.0, 1.0), Angle(0x2000));
        assert_eq!(atan2s(-1.0, 1.0), Angle(0x6000));
        assert_eq!(atan2s(-1.0, -1.0), Angle(0xA000));
        assert_eq!(atan2s(1.0, -1.0), Angle(0xE000));
    }

    #[test]
    fn atan2s_round_trips_through_table_trig() {
        for units in (0u32..65536).step_by(1021) {
            let angle = Angle(units as u16);
            let back = atan2s(coss(angle) * 50.0, sins(angle) * 50.0);
            assert!(back.signed_delta(angle).abs() <= 24, "angle={units} back={back}");
        }
    }
}

#[allow(clippy::excessive_precision)]
static QUARTER_SINE: [f32; QUARTER_ENTRIES + 1] = [
    0.0, 0.0015339801, 0.0030679568, 0.004601926, 0.0061358847, 0.007669829, 0.009203754, 0.010737659,
    0.012271538, 0.0138053885, 0.015339206, 0.016872987, 0.01840673, 0.019940428, 0.02147408, 0.023007682,
    0.024541229, 0.026074719, 0.027608145, 0.029141508, 0.030674804, 0.032208025, 0.033741172, 0.035274237,
    0.036807224, 0.03834012, 0.039872926, 0.04140564, 0.04293826, 0.044470772, 0.04600318, 0.047535483,
    0.049067676, 0.05059975, 0.052131705, 0.053663537, 0.055195246, 0.05672682, 0.058258265, 0.059789572,
    0.061320737, 0.06285176, 0.06438263, 0.06591335, 0.06744392, 0.06897433, 0.070504576, 0.07203465,
    0.07356457, 0.0750943, 0.076623864, 0.078153245, 0.07968244, 0.08121145, 0.08274026, 0.08426889,
    0.08579731, 0.087325536, 0.08885355, 0.09038136, 0.091908954, 0.09343634, 0.0949635, 0.09649043,
    0.09801714, 0.099543616, 0.10106986, 0.102595866, 0.10412163, 0.105647154, 0.10717242, 0.108697444,
    0.110222206, 0.11174671, 0.11327095, 0.114794925, 0.11631863, 0.11784206, 0.119365215, 0.120888084,
    0.12241068, 0.12393297, 0.12545498, 0.1269767, 0.1284981, 0.13001922, 0.13154003, 0.13306053,
    0.1345807, 0.13610058, 0.13762012, 0.13913934, 0.14065824, 0.1421768, 0.14369503, 0.14521292,
    0.14673047, 0.14824767, 0.14976454, 0.15128104, 0.15279719, 0.15431297, 0.1558284, 0.15734346,
    0.15885815, 0.16037245, 0.1618864, 0.16339995, 0.16491312, 0.1664259, 0.16793829, 0.1694503,
    0.17096189, 0.17247309, 0.17398387, 0.17549425, 0.17700422, 0.17851377, 0.1800229, 0.18153161,
    0.18303989, 0.18454774, 0.18605515, 0.18756212, 0.18906866, 0.19057475, 0.1920804, 0.19358559,
    0.19509032, 0.1965946, 0.1980984, 0.19960175, 0.20110464, 0.20260704, 0.20410897, 0.20561041,
    0.20711137, 0.20861185, 0.21011184, 0.21161133, 0.21311031, 0.21460882, 0.2161068, 0.21760428,
    0.21910124, 0.22059768, 0.22209363, 0.22358903, 0.22508392, 0.22657827, 0.22807208, 0.22956537,
    0.2310581, 0.23255031, 0.23404196, 0.23553306, 0.2370236, 0.23851359, 0.24000302, 0.24149188,
    0.24298018, 0.2444679, 0.24595505, 0.24744162, 0.24892761, 0.250413, 0.2518978, 0.25338203,
    0.25486565, 0.25634867, 0.2578311, 0.25931293, 0.2607941, 0.2622747, 0.26375467, 0.26523402,
    0.26671275, 0.26819086, 0.2696683, 0.27114516, 0.27262136, 0.2740969, 0.27557182, 0.27704608,
    0.2785197, 0.27999264, 0.28146493, 0.28293657, 0.28440753, 0.28587782, 0.28734747, 0.28881642,
    0.29028466, 0.29175225, 0.29321915, 0.29468536, 0.2961509, 0.2976157, 0.29907984, 0.30054325,
    0.30200595, 0.30346796, 0.30492923, 0.3063898, 0.30784965, 0.30930877, 0.31076714, 0.3122248,
    0.31368175, 0.31513792, 0.31659338, 0.3180481, 0.31950203, 0.32095525, 0.3224077, 0.32385936,
    0.3253103, 0.32676044, 0.32820985, 0.32965845, 0.3311063, 0.33255336, 0.33399966, 0.33544514,
    0.33688986, 0.33833376, 0.33977687, 0.34121922, 0.34266073, 0.34410143, 0.34554133, 0.34698042,
    0.34841868, 0.34985614, 0.35129276, 0.35272855, 0.35416353, 0.35559767, 0.35703096, 0.3584634,
    0.35989505, 0.3613258, 0.36275572, 0.3641848, 0.36561298, 0.36704034, 0.36846682, 0.36989245,
    0.3713172, 0.37274107, 0.37416407, 0.37558618, 0.37700742, 0.37842774, 0.3798472, 0.38126576,
    0.38268343, 0.3841002, 0.38551605, 0.386931, 0.38834503, 0.38975817, 0.39117038, 0.39258167,
    0.39399204, 0.39540148, 0.39681, 0.39821756, 0.3996242, 0.40102988, 0.40243465, 0.40383846,
    0.4052413, 0.4066432, 0.40804416, 0.40944415, 0.41084316, 0.41224122, 0.41363832, 0.4150344,
    0.41642955, 0.4178237, 0.4192169, 0.4206091, 0.42200026, 0.42339048, 0.42477968, 0.42616788,
    0.42755508, 0.42894128, 0.4303265, 0.43171066, 0.43309382, 0.43447596, 0.4358571, 0.43723717,
    0.43861625, 0.43999428, 0.44137126, 0.44274724, 0.44412214, 0.44549602, 0.44686884, 0.4482406,
    0.44961134, 0.450981, 0.45234957, 0.4537171, 0.45508358, 0.45644897, 0.4578133, 0.45917654,
    0.46053872, 0.4618998, 0.4632598, 0.46461868, 0.4659765, 0.4673332, 0.46868882, 0.47004333,
    0.47139674, 0.47274902, 0.4741002, 0.47545028, 0.47679922, 0.47814706, 0.47949377, 0.48083934,
    0.48218378, 0.48352706, 0.48486924, 0.4862103, 0.48755017, 0.4888889, 0.49022648, 0.4915629,
    0.4928982, 0.4942323, 0.49556527, 0.49689704, 0.49822766, 0.4995571, 0.50088537, 0.50221246,
    0.50353837, 0.5048631, 0.50618666, 0.507509, 0.50883013, 0.5101501, 0.5114688, 0.5127864,
    0.51410276, 0.5154179, 0.5167318, 0.51804453, 0.519356, 0.52066624, 0.5219753, 0.5232831,
    0.52458966, 0.525895, 0.52719915, 0.528502, 0.52980363, 0.531104, 0.5324031, 0.533701,
    0.53499764, 0.53629297, 0.53758705, 0.53887993, 0.54017144, 0.54146177, 0.5427508, 0.54403853,
    0.545325, 0.5466102, 0.54789406, 0.54917663, 0.55045795, 0.55173796, 0.5530167, 0.5542941,
    0.55557024, 0.556845, 0.5581185, 0.5593907, 0.56066155, 0.56193113, 0.56319934, 0.56446624,
    0.5657318, 0.56699604, 0.56825894, 0.56952053, 0.57078075, 0.5720396, 0.57329714, 0.5745534,
    0.57580817, 0.57706165, 0.57831377, 0.5795646, 0.58081394, 0.582062, 0.58330864, 0.58455396,
    0.58579785, 0.58704036, 0.5882816, 0.5895213, 0.5907597, 0.59199667, 0.5932323, 0.5944665,
    0.5956993, 0.5969307, 0.5981607, 0.5993893, 0.60061646, 0.6018422, 0.6030666, 0.60428953,
    0.60551107, 0.6067311, 0.6079498, 0.60916704, 0.6103828, 0.6115972, 0.6128101, 0.61402154,
    0.6152316, 0.6164402, 0.6176473, 0.618853, 0.6200572, 0.62126, 0.62246126, 0.6236611,
    0.6248595, 0.6260564, 0.6272518, 0.62844574, 0.62963825, 0.6308292, 0.63201874, 0.6332068,
    0.6343933, 0.63557833, 0.63676184, 0.6379439, 0.63912445, 0.6403035, 0.64148104, 0.64265704,
    0.64383155, 0.6450045, 0.64617604, 0.64734596, 0.6485144, 0.6496813, 0.65084666, 0.65201056,
    0.65317285, 0.6543336, 0.65549284, 0.65665054, 0.6578067, 0.6589613, 0.66011435, 0.66126585,
    0.6624158, 0.66356415, 0.664711, 0.66585624, 0.66699994, 0.668142, 0.6692826, 0.67042154,
    0.671559, 0.67269474, 0.673829, 0.6749616, 0.6760927, 0.6772222, 0.67835003, 0.6794763,
    0.680601, 0.6817241, 0.68284553, 0.6839654, 0.6850837, 0.6862003, 0.68731534, 0.68842876,
    0.68954057, 0.6906507, 0.6917592, 0.69286615, 0.69397146, 0.6950751, 0.6961771, 0.6972775,
    0.69837624, 0.6994733, 0.7005688, 0.7016626, 0.70275474, 0.70384526, 0.70493406, 0.70602125,
    0.70710677, 0.7081906, 0.7092728, 0.7103534, 0.7114322, 0.7125094, 0.71358484, 0.7146587,
    0.71573085, 0.7168013, 0.71787006, 0.7189371, 0.72000253, 0.7210662, 0.7221282, 0.72318846,
    0.7242471, 0.72530395, 0.7263591, 0.72741264, 0.72846437, 0.7295144, 0.73056275, 0.7316094,
    0.7326543, 0.7336974, 0.7347389, 0.73577857, 0.7368166, 0.7378528, 0.7388873, 0.7399201,
    0.7409511, 0.74198043, 0.74300796, 0.74403375, 0.74505776, 0.7460801, 0.7471006, 0.74811935,
    0.7491364, 0.75015163, 0.75116515, 0.7521768, 0.7531868, 0.754195, 0.7552014, 0.756206,
    0.7572088, 0.7582099, 0.7592092, 0.7602067, 0.7612024, 0.7621963, 0.7631884, 0.76417875,
    0.76516724, 0.766154, 0.7671389, 0.768122, 0.76910335, 0.77008283, 0.7710605, 0.7720364,
    0.77301043, 0.7739827, 0.7749531, 0.7759217, 0.7768885, 0.7778534, 0.7788165, 0.77977777,
    0.7807372, 0.7816948, 0.7826506, 0.7836045, 0.78455657, 0.78550684, 0.7864552, 0.78740174,
    0.7883464, 0.78928924, 0.7902302, 0.79116935, 0.79210657, 0.79304194, 0.7939755, 0.79490715,
    0.7958369, 0.7967648, 0.79769087, 0.798615, 0.79953724, 0.80045766, 0.80137616, 0.8022928,
    0.8032075, 0.80412036, 0.80503136, 0.8059404, 0.8068476, 0.80775285, 0.80865616, 0.8095576,
    0.81045717, 0.8113549, 0.8122506, 0.8131444, 0.8140363, 0.8149263, 0.81581444, 0.8167006,
    0.8175848, 0.81846714, 0.8193475, 0.82022595, 0.8211025, 0.82197714, 0.8228498, 0.8237205,
    0.8245893, 0.82545614, 0.82632107, 0.827184, 0.82804507, 0.8289041, 0.8297612, 0.8306164,
    0.8314696, 0.83232087, 0.8331702, 0.8340175, 0.8348629, 0.8357063, 0.83654773, 0.8373872,
    0.8382247, 0.83906025, 0.8398938, 0.84072536, 0.841555, 0.8423826, 0.84320825, 0.8440319,
    0.8448536, 0.84567326, 0.8464909, 0.8473066, 0.84812033, 0.848932, 0.84974176, 0.85054946,
    0.8513552, 0.8521589, 0.8529606, 0.8537603, 0.854558, 0.85535365, 0.85614735, 0.85693896,
    0.8577286, 0.8585162, 0.8593018, 0.86008537, 0.86086696, 0.8616465, 0.86242396, 0.8631994,
    0.86397284, 0.86474425, 0.8655136, 0.866281, 0.86704624, 0.8678095, 0.8685707, 0.86932987,
    0.87008697, 0.87084204, 0.8715951, 0.87234604, 0.873095, 0.8738418, 0.87458664, 0.8753294,
    0.8760701, 0.8768087, 0.8775453, 0.8782798, 0.8790122, 0.8797426, 0.8804709, 0.8811971,
    0.8819213, 0.88264334, 0.88336337, 0.88408124, 0.8847971, 0.88551086, 0.88622254, 0.88693213,
    0.88763964, 0.88834506, 0.88904834, 0.8897496, 0.89044875, 0.89114577, 0.8918407, 0.89253354,
    0.8932243, 0.893913, 0.8945995, 0.89528394, 0.89596623, 0.8966465, 0.89732456, 0.8980006,
    0.8986745, 0.89934623, 0.9000159, 0.9006834, 0.9013488, 0.90201217, 0.9026733, 0.90333235,
    0.9039893, 0.9046441, 0.90529674, 0.90594727, 0.9065957, 0.907242, 0.9078861, 0.9085281,
    0.909168, 0.9098057, 0.9104413, 0.91107476, 0.91170603, 0.91233516, 0.9129622, 0.91358703,
    0.9142098, 0.9148303, 0.9154487, 0.916065, 0.9166791, 0.917291, 0.9179008, 0.9185084,
    0.9191139, 0.91971713, 0.9203183, 0.9209172, 0.92151403, 0.92210865, 0.9227011, 0.92329144,
    0.9238795, 0.9244655, 0.92504925, 0.9256308, 0.9262102, 0.9267875, 0.9273625, 0.9279354,
    0.9285061, 0.9290746, 0.9296409, 0.93020505, 0.93076694, 0.9313267, 0.9318843, 0.9324396,
    0.9329928, 0.9335438, 0.9340925, 0.93463916, 0.9351835, 0.9357257, 0.93626565, 0.93680346,
    0.937339, 0.93787235, 0.93840355, 0.9389325, 0.9394592, 0.9399837, 0.94050604, 0.94102615,
    0.94154406, 0.94205976, 0.9425732, 0.9430844, 0.94359344, 0.94410026, 0.9446048, 0.9451072,
    0.9456073, 0.94610524, 0.9466009, 0.9470944, 0.9475856, 0.9480746, 0.9485614, 0.9490459,
    0.94952816, 0.9500083, 0.95048606, 0.95096165, 0.951435, 0.95190614, 0.952375, 0.95284164,
    0.953306, 0.9537682, 0.9542281, 0.95468575, 0.9551412, 0.95559436, 0.95604527, 0.9564939,
    0.95694035, 0.9573845, 0.95782644, 0.9582661, 0.95870346, 0.95913863, 0.95957154, 0.9600021,
    0.9604305, 0.9608566, 0.96128047, 0.96170205, 0.9621214, 0.9625385, 0.96295327, 0.9633658,
    0.96377605, 0.96418405, 0.9645898, 0.96499324, 0.96539444, 0.9657934, 0.96619, 0.9665844,
    0.96697646, 0.9673663, 0.9677538, 0.9681391, 0.9685221, 0.9689028, 0.96928126, 0.96965736,
    0.97003126, 0.97040284, 0.97077215, 0.97113913, 0.9715039, 0.9718663, 0.9722265, 0.97258437,
    0.97293997, 0.97329324, 0.97364426, 0.97399294, 0.97433937, 0.9746835, 0.97502536, 0.97536486,
    0.9757021, 0.9760371, 0.97636974, 0.97670007, 0.97702813, 0.9773539, 0.97767735, 0.9779985,
    0.9783174, 0.97863394, 0.9789482, 0.97926015, 0.9795698, 0.9798771, 0.9801821, 0.98048484,
    0.98078525, 0.9810834, 0.9813792, 0.9816727, 0.9819639, 0.9822527, 0.9825393, 0.98282355,
    0.9831055, 0.9833851, 0.9836624, 0.98393744, 0.9842101, 0.98448044, 0.9847485, 0.98501426,
    0.98527765, 0.9855387, 0.9857975, 0.98605394, 0.9863081, 0.9865599, 0.9868094, 0.98705655,
    0.9873014, 0.98754394, 0.98778415, 0.988022, 0.9882576, 0.9884908, 0.98872167, 0.98895025,
    0.9891765, 0.98940045, 0.989622, 0.9898413, 0.9900582, 0.9902728, 0.9904851, 0.990695,
    0.99090266, 0.99110794, 0.99131083, 0.99151146, 0.99170977, 0.9919057, 0.9920993, 0.9922906,
    0.99247956, 0.9926661, 0.9928504, 0.99303234, 0.9932119, 0.9933892, 0.9935641, 0.99373674,
    0.993907, 0.9940749, 0.99424046, 0.99440366, 0.9945646, 0.99472314, 0.9948793, 0.9950332,
    0.9951847, 0.9953339, 0.9954808, 0.99562526, 0.9957674, 0.99590725, 0.9960447, 0.9961798,
    0.9963126, 0.99644303, 0.9965711, 0.9966969, 0.9968203, 0.9969413, 0.99706006, 0.9971764,
    0.99729043, 0.99740213, 0.99751145, 0.99761844, 0.99772304, 0.9978253, 0.9979253, 0.99802285,
    0.9981181, 0.998211, 0.99830157, 0.9983897, 0.99847555, 0.99855906, 0.99864024, 0.99871904,
    0.99879545, 0.99886954, 0.9989413, 0.9990107, 0.99907774, 0.9991424, 0.99920475, 0.9992648,
    0.99932235, 0.99937767, 0.9994306, 0.9994812, 0.9995294, 0.9995753, 0.9996188, 0.99966,
    0.9996988, 0.9997353, 0.9997694, 0.99980116, 0.9998306, 0.99985766, 0.99988234, 0.9999047,
    0.9999247, 0.99994236, 0.9999576, 0.9999706, 0.99998116, 0.9999894, 0.9999953, 0.9999988,
    1.0,
];

static ARCTAN: [u16; ARCTAN_ENTRIES + 1] = [
    0, 10, 20, 31, 41, 51, 61, 71, 81, 92, 102, 112, 122, 132, 143, 153,
    163, 173, 183, 194, 204, 214, 224, 234, 244, 255, 265, 275, 285, 295, 305, 316,
    326, 336, 346, 356, 367, 377, 387, 397, 407, 417, 428, 438, 448, 458, 468, 478,
    489, 499, 509, 519, 529, 539, 550, 560, 570, 580, 590, 600, 610, 621, 631, 641,
    651, 661, 671, 681, 692, 702, 712, 722, 732, 742, 752, 763, 773, 783, 793, 803,
    813, 823, 833, 844, 854, 864, 874, 884, 894, 904, 914, 924, 935, 945, 955, 965,
    975, 985, 995, 1005, 1015, 1025, 1036, 1046, 1056, 1066, 1076, 1086, 1096, 1106, 1116, 1126,
    1136, 1146, 1156, 1166, 1177, 1187, 1197, 1207, 1217, 1227, 1237, 1247, 1257, 1267, 1277, 1287,
    1297, 1307, 1317, 1327, 1337, 1347, 1357, 1367, 1377, 1387, 1397, 1407, 1417, 1427, 1437, 1447,
    1457, 1467, 1477, 1487, 1497, 1507, 1517, 1527, 1537, 1547, 1557, 1567, 1577, 1587, 1597, 1607,
    1617, 1627, 1637, 1646, 1656, 1666, 1676, 1686, 1696, 1706, 1716, 1726, 1736, 1746, 1756, 1765,
    1775, 1785, 1795, 1805, 1815, 1825, 1835, 1845, 1854, 1864, 1874, 1884, 1894, 1904, 1914, 1923,
    1933, 1943, 1953, 1963, 1973, 1982, 1992, 2002, 2012, 2022, 2031, 2041, 2051, 2061, 2071, 2080,
    2090, 2100, 2110, 2120, 2129, 2139, 2149, 2159, 2168, 2178, 2188, 2198, 2207, 2217, 2227, 2237,
    2246, 2256, 2266, 2275, 2285, 2295, 2305, 2314, 2324, 2334, 2343, 2353, 2363, 2372, 2382, 2392,
    2401, 2411, 2421, 2430, 2440, 2450, 2459, 2469, 2478, 2488, 2498, 2507, 2517, 2526, 2536, 2546,
    2555, 2565, 2574, 2584, 2594, 2603, 2613, 2622, 2632, 2641, 2651, 2660, 2670, 2679, 2689, 2699,
    2708, 2718, 2727, 2737, 2746, 2756, 2765, 2775, 2784, 2793, 2803, 2812, 2822, 2831, 2841, 2850,
    2860, 2869, 2879, 2888, 2897, 2907, 2916, 2926, 2935, 2944, 2954, 2963, 2973, 2982, 2991, 3001,
    3010, 3019, 3029, 3038, 3047, 3057, 3066, 3075, 3085, 3094, 3103, 3113, 3122, 3131, 3141, 3150,
    3159, 3168, 3178, 3187, 3196, 3206, 3215, 3224, 3233, 3243, 3252, 3261, 3270, 3279, 3289, 3298,
    3307, 3316, 3325, 3335, 3344, 3353, 3362, 3371, 3380, 3390, 3399, 3408, 3417, 3426, 3435, 3444,
    3453, 3463, 3472, 3481, 3490, 3499, 3508, 3517, 3526, 3535, 3544, 3553, 3562, 3571, 3580, 3589,
    3599, 3608, 3617, 3626, 3635, 3644, 3653, 3662, 3670, 3679, 3688, 3697, 3706, 3715, 3724, 3733,
    3742, 3751, 3760, 3769, 3778, 3787, 3796, 3804, 3813, 3822, 3831, 3840, 3849, 3858, 3867, 3875,
    3884, 3893, 3902, 3911, 3920, 3928, 3937, 3946, 3955, 3964, 3972, 3981, 3990, 3999, 4007, 4016,
    4025, 4034, 4042, 4051, 4060, 4069, 4077, 4086, 4095, 4103, 4112, 4121, 4129, 4138, 4147, 4155,
    4164, 4173, 4181, 4190, 4199, 4207, 4216, 4224, 4233, 4242, 4250, 4259, 4267, 4276, 4284, 4293,
    4302, 4310, 4319, 4327, 4336, 4344, 4353, 4361, 4370, 4378, 4387, 4395, 4404, 4412, 4421, 4429,
    4438, 4446, 4454, 4463, 4471, 4480, 4488, 4497, 4505, 4513, 4522, 4530, 4539, 4547, 4555, 4564,
    4572, 4580, 4589, 4597, 4605, 4614, 4622, 4630, 4639, 4647, 4655, 4663, 4672, 4680, 4688, 4697,
    4705, 4713, 4721, 4730, 4738, 4746, 4754, 4762, 4771, 4779, 4787, 4795, 4803, 4812, 4820, 4828,
    4836, 4844, 4852, 4860, 4869, 4877, 4885, 4893, 4901, 4909, 4917, 4925, 4933, 4941, 4949, 4958,
    4966, 4974, 4982, 4990, 4998, 5006, 5014, 5022, 5030, 5038, 5046, 5054, 5062, 5070, 5078, 5086,
    5094, 5101, 5109, 5117, 5125, 5133, 5141, 5149, 5157, 5165, 5173, 5181, 5188, 5196, 5204, 5212,
    5220, 5228, 5235, 5243, 5251, 5259, 5267, 5275, 5282, 5290, 5298, 5306, 5313, 5321, 5329, 5337,
    5344, 5352, 5360, 5368, 5375, 5383, 5391, 5398, 5406, 5414, 5421, 5429, 5437, 5444, 5452, 5460,
    5467, 5475, 5483, 5490, 5498, 5505, 5513, 5521, 5528, 5536, 5543, 5551, 5559, 5566, 5574, 5581,
    5589, 5596, 5604, 5611, 5619, 5626, 5634, 5641, 5649, 5656, 5664, 5671, 5679, 5686, 5694, 5701,
    5708, 5716, 5723, 5731, 5738, 5745, 5753, 5760, 5768, 5775, 5782, 5790, 5797, 5804, 5812, 5819,
    5826, 5834, 5841, 5848, 5856, 5863, 5870, 5878, 5885, 5892, 5899, 5907, 5914, 5921, 5928, 5936,
    5943, 5950, 5957, 5964, 5972, 5979, 5986, 5993, 6000, 6008, 6015, 6022, 6029, 6036, 6043, 6050,
    6058, 6065, 6072, 6079, 6086, 6093, 6100, 6107, 6114, 6121, 6128, 6135, 6142, 6150, 6157, 6164,
    6171, 6178, 6185, 6192, 6199, 6206, 6213, 6220, 6227, 6234, 6240, 6247, 6254, 6261, 6268, 6275,
    6282, 6289, 6296, 6303, 6310, 6317, 6323, 6330, 6337, 6344, 6351, 6358, 6365, 6371, 6378, 6385,
    6392, 6399, 6406, 6412, 6419, 6426, 6433, 6440, 6446, 6453, 6460, 6467, 6473, 6480, 6487, 6493,
    6500, 6507, 6514, 6520, 6527, 6534, 6540, 6547, 6554, 6560, 6567, 6574, 6580, 6587, 6594, 6600,
    6607, 6613, 6620, 6627, 6633, 6640, 6646, 6653, 6660, 6666, 6673, 6679, 6686, 6692, 6699, 6705,
    6712, 6718, 6725, 6731, 6738, 6744, 6751, 6757, 6764, 6770, 6777, 6783, 6790, 6796, 6803, 6809,
    6815, 6822, 6828, 6835, 6841, 6848, 6854, 6860, 6867, 6873, 6879, 6886, 6892, 6898, 6905, 6911,
    6917, 6924, 6930, 6936, 6943, 6949, 6955, 6962, 6968, 6974, 6980, 6987, 6993, 6999, 7005, 7012,
    7018, 7024, 7030, 7037, 7043, 7049, 7055, 7061, 7068, 7074, 7080, 7086, 7092, 7098, 7105, 7111,
    7117, 7123, 7129, 7135, 7141, 7147, 7154, 7160, 7166, 7172, 7178, 7184, 7190, 7196, 7202, 7208,
    7214, 7220, 7226, 7232, 7238, 7244, 7250, 7256, 7262, 7268, 7274, 7280, 7286, 7292, 7298, 7304,
    7310, 7316, 7322, 7328, 7334, 7340, 7346, 7352, 7358, 7363, 7369, 7375, 7381, 7387, 7393, 7399,
    7405, 7411, 7416, 7422, 7428, 7434, 7440, 7446, 7451, 7457, 7463, 7469, 7475, 7480, 7486, 7492,
    7498, 7503, 7509, 7515, 7521, 7526, 7532, 7538, 7544, 7549, 7555, 7561, 7566, 7572, 7578, 7584,
    7589, 7595, 7601, 7606, 7612, 7618, 7623, 7629, 7635, 7640, 7646, 7651, 7657, 7663, 7668, 7674,
    7679, 7685, 7691, 7696, 7702, 7707, 7713, 7718, 7724, 7730, 7735, 7741, 7746, 7752, 7757, 7763,
    7768, 7774, 7779, 7785, 7790, 7796, 7801, 7807, 7812, 7818, 7823, 7828, 7834, 7839, 7845, 7850,
    7856, 7861, 7866, 7872, 7877, 7883, 7888, 7893, 7899, 7904, 7910, 7915, 7920, 7926, 7931, 7936,
    7942, 7947, 7952, 7958, 7963, 7968, 7974, 7979, 7984, 7990, 7995, 8000, 8005, 8011, 8016, 8021,
    8026, 8032, 8037, 8042, 8047, 8053, 8058, 8063, 8068, 8074, 8079, 8084, 8089, 8094, 8100, 8105,
    8110, 8115, 8120, 8125, 8131, 8136, 8141, 8146, 8151, 8156, 8161, 8166, 8172, 8177, 8182, 8187,
    8192,
];

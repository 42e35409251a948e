//! Device categories and the LVS test cases recorded for each of them.
//!
//! Test case names double as artifact names: `testcases/<name>.gds`,
//! the staged copies, and `<name>.log` in the run directory all derive
//! from them, so entries here must match the recorded layouts exactly.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::RegressionError;

/// A single LVS test case.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TestCase {
    /// Base name of the layout and reference netlist.
    pub name: &'static str,
    /// Extra `-rd` switches placed ahead of the substrate switch.
    pub switches: Option<&'static str>,
}

impl TestCase {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            switches: None,
        }
    }

    pub const fn with_switches(name: &'static str, switches: &'static str) -> Self {
        Self {
            name,
            switches: Some(switches),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Mos,
    Bjt,
    Diode,
    Res,
    Mimcap,
    Moscap,
    MosSab,
    Efuse,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Mos,
        Category::Bjt,
        Category::Diode,
        Category::Res,
        Category::Mimcap,
        Category::Moscap,
        Category::MosSab,
        Category::Efuse,
    ];

    /// The label accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mos => "MOS",
            Category::Bjt => "BJT",
            Category::Diode => "DIODE",
            Category::Res => "RES",
            Category::Mimcap => "MIMCAP",
            Category::Moscap => "MOSCAP",
            Category::MosSab => "MOS_SAB",
            Category::Efuse => "EFUSE",
        }
    }

    /// Heading used in the pass/fail summary, e.g. `MOS DEVICES`.
    pub fn table(&self) -> String {
        format!("{} DEVICES", self.as_str())
    }

    pub fn test_cases(&self) -> &'static [TestCase] {
        match self {
            Category::Mos => MOS_DEVICES,
            Category::Bjt => BJT_DEVICES,
            Category::Diode => DIODE_DEVICES,
            Category::Res => RES_DEVICES,
            Category::Mimcap => MIMCAP_DEVICES,
            Category::Moscap => MOSCAP_DEVICES,
            Category::MosSab => MOS_SAB_DEVICES,
            Category::Efuse => EFUSE_DEVICES,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| RegressionError::UnknownDevice {
                name: s.to_string(),
            })
    }
}

pub const MOS_DEVICES: &[TestCase] = &[
    TestCase::new("sample_pfet_06v0_dn"),
    TestCase::new("sample_nfet_10v0_asym"),
    TestCase::new("sample_nfet_03v3"),
    TestCase::new("sample_pfet_05v0_dn"),
    TestCase::new("sample_pfet_06v0"),
    TestCase::new("sample_nfet_05v0"),
    TestCase::new("sample_nfet_06v0"),
    TestCase::new("sample_nfet_06v0_dn"),
    TestCase::new("sample_pfet_10v0_asym"),
    TestCase::new("sample_nfet_05v0_dn"),
    TestCase::new("sample_pfet_05v0"),
    TestCase::new("sample_pfet_03v3"),
    TestCase::new("sample_nfet_06v0_nvt"),
];

pub const BJT_DEVICES: &[TestCase] = &[
    TestCase::new("npn_10p00x10p00"),
    TestCase::new("npn_05p00x05p00"),
    TestCase::new("npn_00p54x16p00"),
    TestCase::new("npn_00p54x08p00"),
    TestCase::new("npn_00p54x04p00"),
    TestCase::new("npn_00p54x02p00"),
    TestCase::new("pnp_10p00x10p00"),
    TestCase::new("pnp_05p00x05p00"),
    TestCase::new("pnp_10p00x00p42"),
    TestCase::new("pnp_05p00x00p42"),
];

pub const DIODE_DEVICES: &[TestCase] = &[
    TestCase::new("diode_nd2ps_03v3"),
    TestCase::new("diode_nd2ps_03v3_dn"),
    TestCase::new("diode_nd2ps_06v0"),
    TestCase::new("diode_nd2ps_06v0_dn"),
    TestCase::new("diode_pd2nw_03v3"),
    TestCase::new("diode_pd2nw_03v3_dn"),
    TestCase::new("diode_pd2nw_06v0"),
    TestCase::new("diode_pd2nw_06v0_dn"),
    TestCase::new("diode_nw2ps_03v3"),
    TestCase::new("diode_nw2ps_06v0"),
    TestCase::new("diode_pw2dw_03v3"),
    TestCase::new("diode_pw2dw_06v0"),
    TestCase::new("diode_dw2ps_03v3"),
    TestCase::new("diode_dw2ps_06v0"),
    TestCase::new("sc_diode"),
];

pub const RES_DEVICES: &[TestCase] = &[
    TestCase::new("pplus_u"),
    TestCase::new("nplus_s"),
    TestCase::new("pplus_u_dw"),
    TestCase::new("nplus_s_dw"),
    TestCase::new("pplus_s"),
    TestCase::new("pplus_s_dw"),
    TestCase::new("nplus_u_dw"),
    TestCase::new("nplus_u"),
    TestCase::new("nwell"),
    TestCase::new("pwell"),
    TestCase::new("ppolyf_s"),
    TestCase::with_switches("ppolyf_u_3k", "-rd poly_res=3k"),
    TestCase::new("ppolyf_s_dw"),
    TestCase::with_switches("ppolyf_u_1k", "-rd poly_res=1k"),
    TestCase::with_switches("ppolyf_u_3k_6p0_dw", "-rd poly_res=3k"),
    TestCase::new("npolyf_u_dw"),
    TestCase::with_switches("ppolyf_u_3k_dw", "-rd poly_res=3k"),
    TestCase::with_switches("ppolyf_u_3k_6p0", "-rd poly_res=3k"),
    TestCase::new("npolyf_s"),
    TestCase::with_switches("ppolyf_u_1k_6p0_dw", "-rd poly_res=1k"),
    TestCase::new("ppolyf_u"),
    TestCase::new("npolyf_u"),
    TestCase::with_switches("ppolyf_u_2k_dw", "-rd poly_res=2k"),
    TestCase::new("npolyf_s_dw"),
    TestCase::with_switches("ppolyf_u_2k_6p0_dw", "-rd poly_res=2k"),
    TestCase::with_switches("ppolyf_u_2k_6p0", "-rd poly_res=2k"),
    TestCase::new("ppolyf_u_dw"),
    TestCase::with_switches("ppolyf_u_1k_6p0", "-rd poly_res=1k"),
    TestCase::with_switches("ppolyf_u_2k", "-rd poly_res=2k"),
    TestCase::with_switches("ppolyf_u_1k_dw", "-rd poly_res=1k"),
    TestCase::new("rm1"),
    TestCase::new("rm2"),
    TestCase::new("rm3"),
    TestCase::with_switches("tm6k", "-rd metal_top=6K"),
    TestCase::with_switches("tm9k", "-rd metal_top=9K"),
    TestCase::with_switches("tm30k", "-rd metal_top=30K"),
    TestCase::with_switches("tm11k", "-rd metal_top=11K"),
];

pub const MIMCAP_DEVICES: &[TestCase] = &[
    TestCase::with_switches(
        "cap_mim_1f0_m2m3_noshield",
        "-rd mim_option=A -rd mim_cap=1",
    ),
    TestCase::with_switches(
        "cap_mim_1f5_m2m3_noshield",
        "-rd mim_option=A -rd mim_cap=1.5",
    ),
    TestCase::with_switches(
        "cap_mim_2f0_m2m3_noshield",
        "-rd mim_option=A -rd mim_cap=2",
    ),
    TestCase::with_switches(
        "cap_mim_1f0_m3m4_noshield",
        "-rd mim_option=B -rd mim_cap=1",
    ),
    TestCase::with_switches(
        "cap_mim_1f5_m3m4_noshield",
        "-rd mim_option=B -rd mim_cap=1.5",
    ),
    TestCase::with_switches(
        "cap_mim_2f0_m3m4_noshield",
        "-rd mim_option=B -rd mim_cap=2",
    ),
    TestCase::with_switches(
        "cap_mim_1f0_m4m5_noshield",
        "-rd mim_option=B -rd mim_cap=1",
    ),
    TestCase::with_switches(
        "cap_mim_1f5_m4m5_noshield",
        "-rd mim_option=B -rd mim_cap=1.5",
    ),
    TestCase::with_switches(
        "cap_mim_2f0_m4m5_noshield",
        "-rd mim_option=B -rd mim_cap=2",
    ),
    TestCase::with_switches(
        "cap_mim_1f0_m5m6_noshield",
        "-rd mim_option=B -rd mim_cap=1",
    ),
    TestCase::with_switches(
        "cap_mim_1f5_m5m6_noshield",
        "-rd mim_option=B -rd mim_cap=1.5",
    ),
    TestCase::with_switches(
        "cap_mim_2f0_m5m6_noshield",
        "-rd mim_option=B -rd mim_cap=2",
    ),
];

pub const MOSCAP_DEVICES: &[TestCase] = &[
    TestCase::new("cap_pmos_03v3_b"),
    TestCase::new("cap_nmos_03v3_b"),
    TestCase::new("cap_nmos_03v3"),
    TestCase::new("cap_nmos_06v0_b"),
    TestCase::new("cap_pmos_06v0_dn"),
    TestCase::new("cap_nmos_06v0"),
    TestCase::new("cap_pmos_03v3_dn"),
    TestCase::new("cap_pmos_06v0"),
    TestCase::new("cap_nmos_03v3_dn"),
    TestCase::new("cap_pmos_06v0_b"),
    TestCase::new("cap_pmos_03v3"),
    TestCase::new("cap_nmos_06v0_dn"),
];

/// ESD (SAB MOSFET) devices.
pub const MOS_SAB_DEVICES: &[TestCase] = &[
    TestCase::new("sample_pfet_05v0_dss"),
    TestCase::new("sample_nfet_05v0_dss"),
    TestCase::new("sample_pfet_03v3_dn_dss"),
    TestCase::new("sample_pfet_03v3_dss"),
    TestCase::new("sample_pfet_05v0_dn_dss"),
    TestCase::new("sample_nfet_06v0_dss"),
    TestCase::new("sample_pfet_06v0_dn_dss"),
    TestCase::new("sample_nfet_06v0_dn_dss"),
    TestCase::new("sample_nfet_03v3_dn_dss"),
    TestCase::new("sample_nfet_05v0_dn_dss"),
    TestCase::new("sample_nfet_03v3_dss"),
    TestCase::new("sample_pfet_06v0_dss"),
];

pub const EFUSE_DEVICES: &[TestCase] = &[TestCase::new("efuse")];

// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Addresses of the rollup contracts on the origin chain.

use hex_literal::hex;
use primitive_types::H160;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBook {
    pub application_factory: H160,
    pub authority_factory: H160,
    pub erc1155_batch_portal: H160,
    pub erc1155_single_portal: H160,
    pub erc20_portal: H160,
    pub erc721_portal: H160,
    pub ether_portal: H160,
    pub input_box: H160,
    pub quorum_factory: H160,
    pub safe_erc20_transfer: H160,
    pub self_hosted_application_factory: H160,
    /// Contract relaying the application address, if the deployment has one
    pub app_address_relay: Option<H160>,
}

/// Mainnet and devnet deployment.
impl Default for AddressBook {
    fn default() -> Self {
        Self {
            application_factory: H160(hex!("A1DA32BF664109D62208a1cb0d69aACc6a484873")),
            authority_factory: H160(hex!("bDC5D42771A4Ae55eC7670AAdD2458D1d9C7C8A8")),
            erc1155_batch_portal: H160(hex!("4a218D331C0933d7E3EB496ac901669f28D94981")),
            erc1155_single_portal: H160(hex!("2f0D587DD6EcF67d25C558f2e9c3839c579e5e38")),
            erc20_portal: H160(hex!("B0e28881FF7ee9CD5B1229d570540d74bce23D39")),
            erc721_portal: H160(hex!("874b3245ead7474Cb9f3b83cD1446dC522f6bd36")),
            ether_portal: H160(hex!("fa2292f6D85ea4e629B156A4f99219e30D12EE17")),
            input_box: H160(hex!("593E5BCf894D6829Dd26D0810DA7F064406aebB6")),
            quorum_factory: H160(hex!("68C3d53a095f66A215a8bEe096Cd3Ba4fFB7bAb3")),
            safe_erc20_transfer: H160(hex!("817b126F242B5F184Fa685b4f2F91DC99D8115F9")),
            self_hosted_application_factory: H160(hex!(
                "0678FAA399F0193Fb9212BE41590316D275b1392"
            )),
            app_address_relay: Some(H160(hex!("F5DE34d6BbC0446E2a45719E718efEbaaE179daE"))),
        }
    }
}

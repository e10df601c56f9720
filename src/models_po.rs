//! The purchase order record tree.
//!
//! Every struct mirrors one element of the source schema. Fields renamed with
//! an `@` prefix are XML attributes (quick-xml's convention); the rest are
//! child elements. All values are kept as the text found in the document.
//!
//! Three children are singletons in the schema even though the wrappers
//! around them look like collections: `PO_FEES/PO_FEE`, `PO_QTYS/PO_QTY` and
//! `INVN_BASE_ITEM`. A second occurrence is rejected while decoding rather
//! than silently dropped.

use crate::errors::MapperError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root `<DOCUMENT>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "DOCUMENT")]
pub struct Document {
    #[serde(rename = "POS")]
    pub pos: PurchaseOrders,
}

/// The `<POS>` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrders {
    #[serde(rename = "PO", default)]
    pub orders: Vec<PurchaseOrder>,
}

/// Counts reported after a document has been decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub orders: usize,
    pub terms: usize,
    pub items: usize,
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} purchase orders, {} terms, {} items",
            self.orders, self.terms, self.items
        )
    }
}

impl Document {
    pub fn new(orders: Vec<PurchaseOrder>) -> Self {
        Self {
            pos: PurchaseOrders { orders },
        }
    }

    /// Purchase orders in document order.
    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.pos.orders
    }

    /// Returns the first purchase order, or `EmptyDocument` when there is none.
    pub fn first_order(&self) -> Result<&PurchaseOrder, MapperError> {
        self.pos.orders.first().ok_or(MapperError::EmptyDocument)
    }

    pub fn stats(&self) -> DocumentStats {
        let orders = self.orders();
        DocumentStats {
            orders: orders.len(),
            terms: orders.iter().map(|o| o.terms.terms.len()).sum(),
            items: orders.iter().map(|o| o.items.items.len()).sum(),
        }
    }
}

/// Element name of a record that must occur exactly once inside its wrapper.
trait Singleton {
    const TAG: &'static str;
}

/// Reads every occurrence of a singleton record and rejects anything but one.
fn exactly_one<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Singleton,
{
    let mut records = Vec::<T>::deserialize(deserializer)?;
    match records.len() {
        1 => Ok(records.remove(0)),
        n => Err(de::Error::custom(format!(
            "expected exactly one <{}>, found {}",
            T::TAG,
            n
        ))),
    }
}

/// Consumes an element of unknown shape, markup included.
fn skip_content<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    de::IgnoredAny::deserialize(deserializer)?;
    Ok(String::new())
}

/// One `<PO>` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(rename = "@po_sid", default)]
    pub po_sid: String,
    #[serde(rename = "@sbs_no", default)]
    pub sbs_no: String,
    #[serde(rename = "@store_no", default)]
    pub store_no: String,
    #[serde(rename = "@po_no", default)]
    pub po_no: String,
    #[serde(rename = "@po_type", default)]
    pub po_type: String,
    #[serde(rename = "@shipto_store_no", default)]
    pub shipto_store_no: String,
    #[serde(rename = "@billto_store_no", default)]
    pub billto_store_no: String,
    #[serde(rename = "@markedfor_store_no", default)]
    pub markedfor_store_no: String,
    #[serde(rename = "@vend_code", default)]
    pub vend_code: String,
    #[serde(rename = "@vend_acct_no", default)]
    pub vend_acct_no: String,
    #[serde(rename = "@station", default)]
    pub station: String,
    #[serde(rename = "@disc_amt", default)]
    pub disc_amt: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    #[serde(rename = "@from_so", default)]
    pub from_so: String,
    #[serde(rename = "@so_sid", default)]
    pub so_sid: String,
    #[serde(rename = "@created_date", default)]
    pub created_date: String,
    #[serde(rename = "@modified_date", default)]
    pub modified_date: String,
    #[serde(rename = "@shipping_date", default)]
    pub shipping_date: String,
    #[serde(rename = "@cancel_date", default)]
    pub cancel_date: String,
    #[serde(rename = "@lst_activity_date", default)]
    pub lst_activity_date: String,
    #[serde(rename = "@sent_date", default)]
    pub sent_date: String,
    #[serde(rename = "@instruction1", default)]
    pub instruction1: String,
    #[serde(rename = "@instruction2", default)]
    pub instruction2: String,
    #[serde(rename = "@instruction3", default)]
    pub instruction3: String,
    #[serde(rename = "@instruction4", default)]
    pub instruction4: String,
    #[serde(rename = "@instruction5", default)]
    pub instruction5: String,
    #[serde(rename = "@cust_fld", default)]
    pub cust_fld: String,
    #[serde(rename = "@use_vat", default)]
    pub use_vat: String,
    #[serde(rename = "@cms", default)]
    pub cms: String,
    #[serde(rename = "@active", default)]
    pub active: String,
    #[serde(rename = "@verified", default)]
    pub verified: String,
    #[serde(rename = "@held", default)]
    pub held: String,
    #[serde(rename = "@cms_post_date", default)]
    pub cms_post_date: String,
    #[serde(rename = "@edi_flag", default)]
    pub edi_flag: String,
    #[serde(rename = "@edi_date", default)]
    pub edi_date: String,
    #[serde(rename = "@approv_date", default)]
    pub approv_date: String,
    #[serde(rename = "@unverified", default)]
    pub unverified: String,
    #[serde(rename = "@submitted_date", default)]
    pub submitted_date: String,
    #[serde(rename = "@controller", default)]
    pub controller: String,
    #[serde(rename = "@orig_controller", default)]
    pub orig_controller: String,
    #[serde(rename = "@ref_po_sid", default)]
    pub ref_po_sid: String,
    #[serde(rename = "@doc_ref_no", default)]
    pub doc_ref_no: String,
    #[serde(rename = "@pending_po", default)]
    pub pending_po: String,
    #[serde(rename = "@approv_notes", default)]
    pub approv_notes: String,
    #[serde(rename = "@approv_status", default)]
    pub approv_status: String,
    #[serde(rename = "@pending_override", default)]
    pub pending_override: String,
    #[serde(rename = "@diagnose", default)]
    pub diagnose: String,
    #[serde(rename = "@note", default)]
    pub note: String,
    #[serde(rename = "@rate", default)]
    pub rate: String,
    #[serde(rename = "@empl_sbs_no", default)]
    pub empl_sbs_no: String,
    #[serde(rename = "@empl_name", default)]
    pub empl_name: String,
    #[serde(rename = "@so_no", default)]
    pub so_no: String,
    #[serde(rename = "@season_code", default)]
    pub season_code: String,
    #[serde(rename = "@tax_area_name", default)]
    pub tax_area_name: String,
    #[serde(rename = "@approvby_sbs_no", default)]
    pub approvby_sbs_no: String,
    #[serde(rename = "@approvby_empl_name", default)]
    pub approvby_empl_name: String,
    #[serde(rename = "@createdby_sbs_no", default)]
    pub createdby_sbs_no: String,
    #[serde(rename = "@createdby_empl_name", default)]
    pub createdby_empl_name: String,
    #[serde(rename = "@modifiedby_sbs_no", default)]
    pub modifiedby_sbs_no: String,
    #[serde(rename = "@modifiedby_empl_name", default)]
    pub modifiedby_empl_name: String,
    #[serde(rename = "@doc_reason_code", default)]
    pub doc_reason_code: String,
    #[serde(rename = "PO_FEES")]
    pub fees: PoFees,
    #[serde(rename = "PO_TERMS")]
    pub terms: PoTerms,
    /// Raw approval text, kept exactly as written. Serde only skips over the
    /// element; `formats::xml::decode` fills this in from the untrimmed
    /// character data and ignores any child markup.
    #[serde(rename = "PO_APPROVALS", default, deserialize_with = "skip_content")]
    pub approvals: String,
    #[serde(rename = "PO_ITEMS")]
    pub items: PoItems,
}

/// `<PO_FEES>` holds a single fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoFees {
    #[serde(rename = "PO_FEE", deserialize_with = "exactly_one")]
    pub fee: PoFee,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoFee {
    #[serde(rename = "@fee_type", default)]
    pub fee_type: String,
    #[serde(rename = "@amt", default)]
    pub amt: String,
    #[serde(rename = "@fee_name", default)]
    pub fee_name: String,
}

impl Singleton for PoFee {
    const TAG: &'static str = "PO_FEE";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoTerms {
    #[serde(rename = "PO_TERM", default)]
    pub terms: Vec<PoTerm>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoTerm {
    #[serde(rename = "@term_type", default)]
    pub term_type: String,
    #[serde(rename = "@term_no", default)]
    pub term_no: String,
    #[serde(rename = "@days", default)]
    pub days: String,
    #[serde(rename = "@disc_perc", default)]
    pub disc_perc: String,
    #[serde(rename = "@term_date", default)]
    pub term_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoItems {
    #[serde(rename = "PO_ITEM", default)]
    pub items: Vec<PoItem>,
}

/// One `<PO_ITEM>` line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoItem {
    #[serde(rename = "@item_pos", default)]
    pub item_pos: String,
    #[serde(rename = "@item_sid", default)]
    pub item_sid: String,
    #[serde(rename = "@price", default)]
    pub price: String,
    #[serde(rename = "@cost", default)]
    pub cost: String,
    #[serde(rename = "@fc_cost", default)]
    pub fc_cost: String,
    #[serde(rename = "@tax_code", default)]
    pub tax_code: String,
    #[serde(rename = "@tax_perc", default)]
    pub tax_perc: String,
    #[serde(rename = "@tax_code2", default)]
    pub tax_code2: String,
    #[serde(rename = "@tax_perc2", default)]
    pub tax_perc2: String,
    #[serde(rename = "@udf_value1", default)]
    pub udf_value1: String,
    #[serde(rename = "@udf_value2", default)]
    pub udf_value2: String,
    #[serde(rename = "@udf_value3", default)]
    pub udf_value3: String,
    #[serde(rename = "@udf_value4", default)]
    pub udf_value4: String,
    #[serde(rename = "@item_note1", default)]
    pub item_note1: String,
    #[serde(rename = "@item_note2", default)]
    pub item_note2: String,
    #[serde(rename = "@item_note3", default)]
    pub item_note3: String,
    #[serde(rename = "@item_note4", default)]
    pub item_note4: String,
    #[serde(rename = "@item_note5", default)]
    pub item_note5: String,
    #[serde(rename = "@item_note6", default)]
    pub item_note6: String,
    #[serde(rename = "@item_note7", default)]
    pub item_note7: String,
    #[serde(rename = "@item_note8", default)]
    pub item_note8: String,
    #[serde(rename = "@item_note9", default)]
    pub item_note9: String,
    #[serde(rename = "@item_note10", default)]
    pub item_note10: String,
    #[serde(rename = "@alt_upc", default)]
    pub alt_upc: String,
    #[serde(rename = "@alt_alu", default)]
    pub alt_alu: String,
    #[serde(rename = "@alt_cost", default)]
    pub alt_cost: String,
    #[serde(rename = "@alt_vend_code", default)]
    pub alt_vend_code: String,
    #[serde(rename = "@currency_name", default)]
    pub currency_name: String,
    #[serde(rename = "@tax_area2_name", default)]
    pub tax_area2_name: String,
    #[serde(rename = "INVN_BASE_ITEM")]
    pub base_item: BaseItem,
    #[serde(rename = "PO_QTYS")]
    pub quantities: PoQtys,
}

/// Catalog data of a line item (`<INVN_BASE_ITEM>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseItem {
    #[serde(rename = "@item_sid", default)]
    pub item_sid: String,
    #[serde(rename = "@upc", default)]
    pub upc: String,
    #[serde(rename = "@alu", default)]
    pub alu: String,
    #[serde(rename = "@style_sid", default)]
    pub style_sid: String,
    #[serde(rename = "@dcs_code", default)]
    pub dcs_code: String,
    #[serde(rename = "@vend_code", default)]
    pub vend_code: String,
    #[serde(rename = "@scale_no", default)]
    pub scale_no: String,
    #[serde(rename = "@description1", default)]
    pub description1: String,
    #[serde(rename = "@description2", default)]
    pub description2: String,
    #[serde(rename = "@description3", default)]
    pub description3: String,
    #[serde(rename = "@description4", default)]
    pub description4: String,
    #[serde(rename = "@attr", default)]
    pub attr: String,
    #[serde(rename = "@siz", default)]
    pub siz: String,
    #[serde(rename = "@use_qty_decimals", default)]
    pub use_qty_decimals: String,
    #[serde(rename = "@tax_code", default)]
    pub tax_code: String,
    #[serde(rename = "@flag", default)]
    pub flag: String,
    #[serde(rename = "@ext_flag", default)]
    pub ext_flag: String,
    #[serde(rename = "@item_no", default)]
    pub item_no: String,
    #[serde(rename = "@udf3_value", default)]
    pub udf3_value: String,
    #[serde(rename = "@udf4_value", default)]
    pub udf4_value: String,
    #[serde(rename = "@udf5_value", default)]
    pub udf5_value: String,
    #[serde(rename = "@udf6_value", default)]
    pub udf6_value: String,
    #[serde(rename = "@aux1_value", default)]
    pub aux1_value: String,
    #[serde(rename = "@aux2_value", default)]
    pub aux2_value: String,
    #[serde(rename = "@aux3_value", default)]
    pub aux3_value: String,
    #[serde(rename = "@aux4_value", default)]
    pub aux4_value: String,
    #[serde(rename = "@aux5_value", default)]
    pub aux5_value: String,
    #[serde(rename = "@aux6_value", default)]
    pub aux6_value: String,
    #[serde(rename = "@aux7_value", default)]
    pub aux7_value: String,
    #[serde(rename = "@aux8_value", default)]
    pub aux8_value: String,
}

/// `<PO_QTYS>` wraps exactly one quantity record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoQtys {
    #[serde(rename = "PO_QTY", deserialize_with = "exactly_one")]
    pub qty: PoQty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoQty {
    #[serde(rename = "@store_no", default)]
    pub store_no: String,
    #[serde(rename = "@ord_qty", default)]
    pub ord_qty: String,
    #[serde(rename = "@rcvd_qty", default)]
    pub rcvd_qty: String,
}

impl Singleton for PoQty {
    const TAG: &'static str = "PO_QTY";
}

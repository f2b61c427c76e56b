use serde::Deserialize;
use serde_json::Value;

use crate::domain::PriceRecord;

// props
//  └── pageProps
//       ├── statusCode        (only on error pages)
//       └── data
//            └── buildings[]
//                 ├── buildingname
//                 ├── buildingaddress
//                 ├── region
//                 ├── medianpredprice
//                 ├── transactionscount
//                 ├── built
//                 ├── numberofunits
//                 ├── numberoffloors
//                 └── colour          "r,g,b"

#[derive(Debug, Deserialize)]
pub struct NextData {
    pub props: Props,
}

#[derive(Debug, Deserialize)]
pub struct Props {
    #[serde(rename = "pageProps")]
    pub page_props: PageProps,
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    #[serde(rename = "statusCode")]
    pub status_code: Option<Value>,
    pub data: Option<PageData>,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    pub buildings: Option<Vec<PriceRecord>>,
}

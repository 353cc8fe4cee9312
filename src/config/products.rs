/// A product page to scrape and the name shown for it in the summary.
#[derive(Debug, Clone, Copy)]
pub struct ProductSpec<'a> {
    pub page_url: &'a str,
    pub display_name: &'a str,
}

pub const PRODUCTS: &[ProductSpec<'static>] = &[
    ProductSpec {
        page_url: "https://www.walmart.com/ip/Nirvana-Striped-Men-s-Big-Men-s-Graphic-Tee-Shirt-Sizes-S-3XL/15563221134",
        display_name: "Nirvana Smiley Striped Graphic Tee",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/South-Park-Mens-Big-Men-s-Graphic-Tee-Shirt-Cartman-Sizes-S-3XL/9370572438",
        display_name: "South Park Cartman Graphic Tee",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/SpongeBob-SquarePants-Character-Group-Shot-Men-s-Big-Men-s-Graphic-Tee-Sizes-S-3XL/599159676",
        display_name: "SpongeBob SquarePants Character Group Graphic Tee",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/Stranger-Things-Men-s-Big-Men-s-Graphic-Tee-Sizes-S-3XL/16336561774",
        display_name: "Netflix Stranger Things Logo Graphic Tee",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/Men-s-Nintendo-8-Bit-Icons-Graphic-T-Shirt/13574752283",
        display_name: "Nintendo 8-Bit Icons Graphic T-Shirt",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/Rick-Morty-Men-s-Big-Men-s-Embroidered-Graphic-Tee-Shirt-Sizes-S-3XL/2599230000",
        display_name: "Rick & Morty Embroidered Graphic Tee",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/Men-s-Star-Wars-Most-Impressive-Graphic-Tee-Black-Medium/190607266",
        display_name: "Star Wars Most Impressive Graphic Tee",
    },
    ProductSpec {
        page_url: "https://www.walmart.com/ip/Superman-Men-s-and-Big-Men-s-Graphic-Tee-with-Short-Sleeves-Sizes-S-3XL/14114760123",
        display_name: "Superman Shield Logo Graphic Tee",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_eight_distinct_walmart_pages() {
        assert_eq!(PRODUCTS.len(), 8);

        for product in PRODUCTS {
            assert!(product.page_url.starts_with("https://www.walmart.com/ip/"));
            assert!(!product.display_name.is_empty());
        }

        let urls: HashSet<&str> = PRODUCTS.iter().map(|product| product.page_url).collect();
        assert_eq!(urls.len(), PRODUCTS.len());
    }
}
